use clap::Parser;
use std::fs;
use tempfile::TempDir;
use uiform::cli::Cli;
use uiform::config::Settings;

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_path(temp_dir.path().join("uiform.toml"))?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert!(!settings.session.reset_submitted_on_schema_change);
    assert_eq!(settings.logging.level, "info");
    Ok(())
}

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("uiform.toml");

    let uiform_toml = r#"
[server]
host = "0.0.0.0"
port = 8088

[session]
reset_submitted_on_schema_change = true

[logging]
level = "uiform=debug"
"#;
    fs::write(&path, uiform_toml)?;

    let settings = Settings::from_path(&path)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8088);
    assert!(settings.session.reset_submitted_on_schema_change);
    assert_eq!(settings.logging.level, "uiform=debug");
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("uiform.toml");
    fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 8088\n")?;

    let path_arg = path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["uiform", "--config", &path_arg, "serve", "--port", "9000"]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 9000);
    Ok(())
}

#[test]
fn test_invalid_port_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("uiform.toml");
    fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 0\n")?;

    let err = Settings::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("server.port"));
    Ok(())
}
