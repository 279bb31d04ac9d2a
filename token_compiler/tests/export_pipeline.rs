//! End-to-end export runs against real files.

use assert_matches::assert_matches;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use token_compiler::export::ExportError;
use token_compiler::reference_resolution::ResolutionError;
use token_compiler::{
    run, FsArtifactWriter, GeneratorConfig, MemoryArtifactWriter, PipelineError, RunOptions,
};

const BASIC: &str = r#"{
    "categories": {
        "colors": {"tokenPrefix": "c"},
        "spacing": {"tokenPrefix": "s"},
        "radiuses": {"tokenPrefix": "r"},
        "breakpoints": {"tokenPrefix": "bp"}
    },
    "tokens": {
        "highlightBase": {"category": "colors", "value": {"h": 212, "s": 63, "l": 45}},
        "whiteBase": {"category": "colors", "value": {"h": 0, "s": 0, "l": 100}},
        "xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}},
        "basic": {"category": "radiuses", "value": {"value": 2, "unit": "px"}},
        "smallTabletBreakpoint": {"category": "breakpoints", "value": {"value": 600, "unit": "px"}}
    }
}"#;

const DERIVED: &str = r#"{
    "categories": {
        "shadows": {"tokenPrefix": "sh"},
        "focuses": {"tokenPrefix": "f"}
    },
    "tokens": {
        "focusGlow": {
            "category": "shadows",
            "type": "derived-string",
            "value": {"value": "0 0 0 2px {colors.highlightBase, alpha-0.5}, inset 0 0 0 1px {colors.whiteBase}"}
        },
        "focusRing": {
            "category": "focuses",
            "type": "derived-object",
            "wrapper": "&:focus",
            "value": {
                "outline": "none",
                "top": {"value": "{radiuses.basic}", "unit": null},
                "boxShadow": "0 0 0 2px {colors.highlightBase}",
                "borderRadius": "{radiuses.basic}"
            }
        }
    }
}"#;

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    fn document(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn outdir(&self) -> PathBuf {
        self.temp.path().join("dist")
    }
}

fn formats(list: &str) -> Vec<String> {
    vec![list.to_string()]
}

#[test]
fn spacing_token_renders_in_both_formats() {
    let ws = Workspace::new();
    let tokens = ws.document(
        "tokens.json",
        r#"{
            "categories": {"spacing": {"tokenPrefix": "s"}},
            "tokens": {"xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}}}
        }"#,
    );

    let options = RunOptions::new(&tokens, ws.outdir(), formats("scss ts"));
    let report = run(&options, &FsArtifactWriter).unwrap();

    assert!(report.is_success());
    assert_eq!(report.written.len(), 2);

    let scss = fs::read_to_string(ws.outdir().join("tokens.scss")).unwrap();
    assert_eq!(scss, "$fi-s-xxl: 40px;\n");

    let ts = fs::read_to_string(ws.outdir().join("index.ts")).unwrap();
    assert!(ts.contains(r#""xxl":{"value":40,"unit":"px"}"#));
    assert!(ts.contains("  xxl: ValueUnit;\n"));
}

#[test]
fn derived_tokens_are_resolved_before_rendering() {
    let ws = Workspace::new();
    let tokens = ws.document("tokens.json", BASIC);
    let derived = ws.document("derived.json", DERIVED);
    let writer = MemoryArtifactWriter::new();

    let options = RunOptions::new(&tokens, "out", formats("scss ts")).with_derived(&derived);
    let report = run(&options, &writer).unwrap();

    assert_eq!(report.token_count, 7);
    assert_eq!(report.derived_token_count, 2);
    assert_eq!(report.placeholders_substituted, 5);

    let scss = writer.get(Path::new("out/tokens.scss")).unwrap();
    assert!(!scss.contains("{radiuses."));
    assert!(!scss.contains("{colors."));
    assert!(scss.contains(
        "$fi-sh-focus-glow: 0 0 0 2px hsla(212, 63%, 45%, 0.5), inset 0 0 0 1px hsl(0, 0%, 100%);\n"
    ));
    assert!(scss.contains(
        "@mixin fi-f-focus-ring {\n  \
         &:focus {\n    \
         top: 2px;\n    \
         border-radius: 2px;\n    \
         box-shadow: 0 0 0 2px hsl(212, 63%, 45%);\n    \
         outline: none;\n  \
         }\n\
         }\n"
    ));
    assert!(scss.contains("$fi-bp-small-tablet: 600px;\n"));

    let ts = writer.get(Path::new("out/index.ts")).unwrap();
    assert!(!ts.contains("{colors."));
    assert!(ts.contains("  focusRing: FocusToken;\n"));
    assert!(ts.contains("  smallTablet: ValueUnit;\n"));
}

#[test]
fn unresolved_reference_aborts_without_writing() {
    let ws = Workspace::new();
    let tokens = ws.document("tokens.json", BASIC);
    let derived = ws.document(
        "derived.json",
        r#"{
            "categories": {"shadows": {"tokenPrefix": "sh"}},
            "tokens": {"broken": {"category": "shadows", "type": "derived-string",
                "value": {"value": "0 1px {colors.doesNotExist}"}}}
        }"#,
    );

    let options = RunOptions::new(&tokens, ws.outdir(), formats("scss ts")).with_derived(&derived);
    let error = run(&options, &FsArtifactWriter).unwrap_err();

    assert_matches!(
        error,
        PipelineError::Resolution(ResolutionError::UnresolvedReference { ref reference, .. })
            if reference == "colors.doesNotExist"
    );
    assert!(error.to_string().contains("colors.doesNotExist"));
    assert!(!ws.outdir().exists());
}

#[test]
fn unknown_format_aborts_without_writing() {
    let ws = Workspace::new();
    let tokens = ws.document("tokens.json", BASIC);

    let options = RunOptions::new(&tokens, ws.outdir(), formats("scss xml"));
    let error = run(&options, &FsArtifactWriter).unwrap_err();

    assert_matches!(
        error,
        PipelineError::Export(ExportError::UnknownFormat { ref format, .. }) if format == "xml"
    );
    assert!(!ws.outdir().exists());
}

#[test]
fn undeclared_category_is_a_load_error() {
    let ws = Workspace::new();
    let tokens = ws.document(
        "tokens.json",
        r#"{
            "categories": {"spacing": {"tokenPrefix": "s"}},
            "tokens": {"red": {"category": "colors", "value": {"h": 0, "s": 100, "l": 50}}}
        }"#,
    );

    let options = RunOptions::new(&tokens, ws.outdir(), formats("scss"));

    assert_matches!(run(&options, &FsArtifactWriter), Err(PipelineError::Catalog(_)));
    assert!(!ws.outdir().exists());
}

#[test]
fn repeated_runs_produce_identical_artifacts() {
    let ws = Workspace::new();
    let tokens = ws.document("tokens.json", BASIC);
    let derived = ws.document("derived.json", DERIVED);

    let render = || {
        let writer = MemoryArtifactWriter::new();
        let options = RunOptions::new(&tokens, "out", formats("ts scss")).with_derived(&derived);
        run(&options, &writer).unwrap();
        writer.artifacts()
    };

    let first = render();
    assert_eq!(first.len(), 2);
    for _ in 0..3 {
        assert_eq!(render(), first);
    }
}

#[test]
fn configuration_renames_outputs() {
    let ws = Workspace::new();
    let tokens = ws.document("tokens.json", BASIC);
    let config_path = ws.document(
        "tokens.toml",
        r#"
            scss_prefix = "ds"

            [typescript]
            string_export_name = "tokens"

            [outputs]
            ts = "design-tokens"
        "#,
    );
    let config = GeneratorConfig::load(Some(config_path.as_path())).unwrap();
    let writer = MemoryArtifactWriter::new();

    let options = RunOptions::new(&tokens, "out", formats("scss ts")).with_config(config);
    run(&options, &writer).unwrap();

    let scss = writer.get(Path::new("out/tokens.scss")).unwrap();
    assert!(scss.starts_with("$ds-c-highlight-base: hsl(212, 63%, 45%);\n"));

    let ts = writer.get(Path::new("out/design-tokens.ts")).unwrap();
    assert!(ts.contains("export const tokens: DesignTokens = {"));
}
