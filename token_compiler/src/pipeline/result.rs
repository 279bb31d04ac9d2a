use crate::export::ExportError;
use crate::logging::codes;
use crate::renderers::RenderWarning;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Everything a completed run produced
#[derive(Debug)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    pub failed_writes: Vec<ExportError>,
    pub warnings: Vec<RenderWarning>,
    pub token_count: usize,
    pub derived_token_count: usize,
    pub placeholders_substituted: usize,
    pub duration: Duration,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// True when every requested artifact was written
    pub fn is_success(&self) -> bool {
        self.failed_writes.is_empty()
    }

    pub fn log_summary(&self) {
        let finished_at = self.finished_at.to_rfc3339();

        if self.is_success() {
            crate::log_performance!(codes::success::EXPORT_COMPLETE, "Design token export completed",
                duration = self.duration,
                "artifacts" => self.written.len(),
                "tokens" => self.token_count,
                "derived_tokens" => self.derived_token_count,
                "placeholders" => self.placeholders_substituted,
                "warnings" => self.warnings.len(),
                "finished_at" => finished_at
            );
        } else {
            let duration_ms = format!("{:.2}", self.duration.as_secs_f64() * 1000.0);
            crate::log_error!(codes::export::ARTIFACT_WRITE_FAILURE, "Design token export finished with write failures",
                "written" => self.written.len(),
                "failed" => self.failed_writes.len(),
                "duration_ms" => duration_ms,
                "finished_at" => finished_at
            );
        }
    }
}
