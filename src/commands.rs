//! One-shot CLI commands

use anyhow::Context;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;
use uiform_core::{compile, parse_ui_schema_value};

use crate::cli::{Cli, Command, CompileArgs};

/// Run a one-shot subcommand. These never load `uiform.toml`, so a broken
/// server config does not get in their way.
pub fn run_one_shot(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Some(Command::Compile(args)) => compile_command(args, out),
        Some(Command::Serve(_)) | None => anyhow::bail!("serve is not a one-shot command"),
    }
}

/// Read a UI schema, compile it and write the JSON Schema to `out`
pub fn compile_command(args: &CompileArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let content = read_input(&args.input)?;
    let document = parse_document(&args.input, &content)?;

    let fields = parse_ui_schema_value(document)
        .with_context(|| format!("Invalid UI schema in {}", args.input.display()))?;
    let schema = compile(&fields);
    info!("Compiled {} top-level fields from {}", fields.len(), args.input.display());

    let json = if args.pretty {
        schema.to_json_pretty()?
    } else {
        schema.to_json()?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read UI schema from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_document(path: &Path, content: &str) -> anyhow::Result<Value> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let document = match ext {
        "yaml" | "yml" => serde_yaml::from_str(content)
            .with_context(|| format!("YAML parse error in {}", path.display()))?,
        _ => serde_json::from_str(content)
            .with_context(|| format!("JSON parse error in {}", path.display()))?,
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run(path: PathBuf, pretty: bool) -> anyhow::Result<Value> {
        let mut out = Vec::new();
        compile_command(&CompileArgs { input: path, pretty }, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_compiles_json_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("form.json");
        std::fs::write(&path, r#"[{"jsonKey":"agree","uiType":"Switch","label":"Agree"}]"#)?;

        let schema = run(path, false)?;
        assert_eq!(schema["properties"]["agree"]["type"], "boolean");
        Ok(())
    }

    #[test]
    fn test_compiles_yaml_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("form.yaml");
        std::fs::write(
            &path,
            r#"
- jsonKey: color
  uiType: Radio
  label: Color
  validate:
    options:
      - value: red
        label: Red
      - value: blue
        label: Blue
"#,
        )?;

        let schema = run(path, true)?;
        assert_eq!(schema["properties"]["color"]["enum"], serde_json::json!(["red", "blue"]));
        Ok(())
    }

    #[test]
    fn test_rejects_non_array_document() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("form.json");
        std::fs::write(&path, r#"{"jsonKey":"x"}"#)?;

        let err = run(path, false).unwrap_err();
        assert!(format!("{:#}", err).contains("must be a JSON array"));
        Ok(())
    }

    #[test]
    fn test_compile_ignores_invalid_config_file() -> anyhow::Result<()> {
        use clap::Parser;

        let dir = TempDir::new()?;
        let config = dir.path().join("uiform.toml");
        std::fs::write(&config, "[server]\nhost = \"127.0.0.1\"\nport = 0\n")?;
        let input = dir.path().join("form.json");
        std::fs::write(&input, r#"[{"jsonKey":"name","uiType":"Input"}]"#)?;

        let config_arg = config.to_string_lossy().to_string();
        let input_arg = input.to_string_lossy().to_string();
        let cli = Cli::parse_from(["uiform", "--config", &config_arg, "compile", &input_arg]);
        assert!(crate::config::Settings::new_with_cli(&cli).is_err());

        assert!(cli.is_one_shot());
        let mut out = Vec::new();
        run_one_shot(&cli, &mut out)?;
        let schema: Value = serde_json::from_slice(&out)?;
        assert_eq!(schema["properties"]["name"]["type"], "string");
        Ok(())
    }

    #[test]
    fn test_serve_is_not_one_shot() {
        use clap::Parser;

        let cli = Cli::parse_from(["uiform", "serve"]);
        assert!(!cli.is_one_shot());
        assert!(run_one_shot(&cli, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(run(PathBuf::from("/definitely/not/here.json"), false).is_err());
    }
}
