//! Global logging module for the token compiler
//!
//! Provides thread-safe global logging with coded events, a stage-aware
//! context (which pipeline stage and which document is being processed),
//! and a small macro interface.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static STAGE_CONTEXT: RefCell<Option<StageContext>> = const { RefCell::new(None) };
}

/// Pipeline stage currently emitting events on this thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageContext {
    pub stage: &'static str,
    pub source: Option<String>,
}

impl StageContext {
    pub fn new(stage: &'static str, source: Option<String>) -> Self {
        Self { stage, source }
    }
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    // Every code the pipeline raises on a fatal path must carry metadata
    let required_codes = [
        codes::catalog::UNDECLARED_CATEGORY,
        codes::references::UNRESOLVED_REFERENCE,
        codes::export::UNKNOWN_FORMAT,
        codes::rendering::UNSUPPORTED_CATEGORY,
    ];
    for code in required_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for code: {}", code));
        }
    }

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// STAGE CONTEXT MANAGEMENT
// ============================================================================

pub fn set_stage_context(stage: &'static str, source: Option<String>) {
    STAGE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(StageContext::new(stage, source));
    });
}

pub fn clear_stage_context() {
    STAGE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with a stage context, restoring the previous one afterwards
pub fn with_stage_context<F, R>(stage: &'static str, source: Option<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let previous = get_current_stage_context();
    set_stage_context(stage, source);
    let result = f();
    STAGE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = previous;
    });
    result
}

pub fn get_current_stage_context() -> Option<StageContext> {
    STAGE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn build_event(mut event: LogEvent, context: Vec<(&str, &str)>) -> LogEvent {
    let max_length = config::get_max_log_message_length();
    if event.message.len() > max_length {
        let mut cut = max_length;
        while !event.message.is_char_boundary(cut) {
            cut -= 1;
        }
        event.message.truncate(cut);
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(stage_ctx) = get_current_stage_context() {
        event = event.with_context("stage", stage_ctx.stage);
        if let Some(source) = &stage_ctx.source {
            event = event.with_context("source", source);
        }
    }

    event
}

fn dispatch(event: LogEvent) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::error(code, message), context));
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::success(code, message), context));
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::info(message), context));
}

/// Log warning with context (used by log_warning! macro)
pub fn log_warning_with_context(code: Option<Code>, message: &str, context: Vec<(&str, &str)>) {
    let event = match code {
        Some(code) => LogEvent::warning_with_code(code, message),
        None => LogEvent::warning(message),
    };
    dispatch(build_event(event, context));
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::debug(message), context));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_context_management() {
        assert!(get_current_stage_context().is_none());

        set_stage_context("load", Some("tokens.json".to_string()));
        let context = get_current_stage_context().unwrap();
        assert_eq!(context.stage, "load");
        assert_eq!(context.source.as_deref(), Some("tokens.json"));

        clear_stage_context();
        assert!(get_current_stage_context().is_none());
    }

    #[test]
    fn test_with_stage_context_restores_previous() {
        let result = with_stage_context("render", None, || {
            let inner = with_stage_context("resolve", None, || {
                get_current_stage_context().map(|c| c.stage)
            });
            assert_eq!(inner, Some("resolve"));
            get_current_stage_context().map(|c| c.stage)
        });

        assert_eq!(result, Some("render"));
        assert!(get_current_stage_context().is_none());
    }

    #[test]
    fn test_build_event_attaches_stage() {
        let event = with_stage_context("load", Some("derived.json".to_string()), || {
            build_event(LogEvent::info("Loading"), vec![("tokens", "3")])
        });

        assert_eq!(event.context.get("stage").map(String::as_str), Some("load"));
        assert_eq!(
            event.context.get("source").map(String::as_str),
            Some("derived.json")
        );
        assert_eq!(event.context.get("tokens").map(String::as_str), Some("3"));
    }
}
