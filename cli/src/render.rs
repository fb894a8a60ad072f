#![deny(missing_docs)]

//! # Render Command
//!
//! Reads an OpenAPI document, renders it through the default registry plus the
//! selected theme, and writes HTML or the JSON node tree.

use std::fs;
use std::path::PathBuf;

use oasdoc_core::{
    default_registry, parse_document, render_document, to_html, AppError, AppResult, Theme,
};
use tracing::info;

/// Serialization of the rendered tree.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// An HTML page.
    #[default]
    Html,
    /// The node tree as pretty-printed JSON.
    Json,
}

/// Arguments for the render command.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Path to the OpenAPI document (YAML or JSON).
    #[clap(long, env = "OASDOC_INPUT")]
    pub input: PathBuf,

    /// Output file. Prints to stdout when omitted.
    #[clap(long, env = "OASDOC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[clap(long, value_enum, env = "OASDOC_FORMAT", default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Override set applied on top of the default renderers (`plain` or `tailwind`).
    #[clap(long, env = "OASDOC_THEME", default_value = "plain")]
    pub theme: Theme,
}

/// Executes the render command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &RenderArgs) -> AppResult<()> {
    let rendered = render_to_string(args)?;

    match &args.output {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| {
                        AppError::General(format!("Failed to create output directory: {}", e))
                    })?;
                }
            }
            fs::write(out_path, rendered)
                .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;
            info!(output = ?out_path, "Documentation written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Reads, parses and renders the input into the requested format.
pub fn render_to_string(args: &RenderArgs) -> AppResult<String> {
    if !args.input.exists() {
        return Err(AppError::General(format!(
            "OpenAPI file not found: {:?}",
            args.input
        )));
    }

    let content = fs::read_to_string(&args.input)
        .map_err(|e| AppError::General(format!("Failed to read OpenAPI: {}", e)))?;
    let document = parse_document(&content)?;

    let registry = default_registry()?.with_overrides(&args.theme.overrides());
    info!(input = ?args.input, theme = %args.theme, paths = document.paths.len(), "Rendering document");
    let tree = render_document(&registry, &document);

    match args.format {
        OutputFormat::Html => Ok(format!("<!DOCTYPE html>\n{}", to_html(&tree))),
        OutputFormat::Json => serde_json::to_string_pretty(&tree)
            .map_err(|e| AppError::General(format!("JSON serialization failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const YAML: &str = r#"
openapi: 3.1.0
info: {title: CLI <Test>, version: '1.0'}
paths:
  /health:
    get:
      operationId: health
      responses:
        '200': { description: OK }
"#;

    fn args(input: PathBuf, output: Option<PathBuf>) -> RenderArgs {
        RenderArgs {
            input,
            output,
            format: OutputFormat::Html,
            theme: Theme::Plain,
        }
    }

    #[test]
    fn test_execute_writes_html() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.yaml");
        let output = dir.path().join("docs/index.html");
        fs::write(&input, YAML).unwrap();

        execute(&args(input, Some(output.clone()))).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(html.contains("<title>CLI &lt;Test&gt;</title>"));
        assert!(html.contains("<span class=\"status\">200</span>"));
    }

    #[test]
    fn test_render_json_tree() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.yaml");
        fs::write(&input, YAML).unwrap();

        let mut json_args = args(input, None);
        json_args.format = OutputFormat::Json;
        let out = render_to_string(&json_args).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["element"]["tag"], "html");
    }

    #[test]
    fn test_tailwind_theme_applied() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.yaml");
        fs::write(&input, YAML).unwrap();

        let mut themed = args(input, None);
        themed.theme = Theme::Tailwind;
        let html = render_to_string(&themed).unwrap();
        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(html.contains("text-green-500"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let err = execute(&args(dir.path().join("missing.yaml"), None)).unwrap_err();
        assert!(format!("{}", err).contains("OpenAPI file not found"));
    }

    #[test]
    fn test_invalid_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.yaml");
        fs::write(&input, "info: [unclosed").unwrap();

        let err = render_to_string(&args(input, None)).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
