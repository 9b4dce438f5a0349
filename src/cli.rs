use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// uiform - paste a UI schema, get a live JSON-Schema-driven form
#[derive(Parser, Debug, Clone)]
#[command(name = "uiform", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "UIFORM_CONFIG", default_value = "uiform.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the form builder UI and JSON API (default)
    Serve(ServeArgs),
    /// Compile a UI schema file and print the resulting JSON Schema
    Compile(CompileArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Server host address
    #[arg(long, env = "UIFORM_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "UIFORM_PORT")]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
pub struct CompileArgs {
    /// UI schema file (.json, .yaml, .yml) or "-" for stdin
    pub input: PathBuf,

    /// Pretty-print the compiled schema
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Serve arguments, falling back to defaults when no subcommand was given
    pub fn serve_args(&self) -> ServeArgs {
        match &self.command {
            Some(Command::Serve(args)) => args.clone(),
            _ => ServeArgs::default(),
        }
    }

    /// Whether the subcommand runs once and exits instead of serving
    pub fn is_one_shot(&self) -> bool {
        matches!(self.command, Some(Command::Compile(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["uiform"]);
        assert_eq!(cli.config, PathBuf::from("uiform.toml"));
        assert!(cli.command.is_none());

        let serve = cli.serve_args();
        assert!(serve.host.is_none());
        assert!(serve.port.is_none());
    }

    #[test]
    fn test_serve_with_args() {
        let cli = Cli::parse_from([
            "uiform",
            "--config",
            "custom.toml",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        let serve = cli.serve_args();
        assert_eq!(serve.host, Some("0.0.0.0".to_string()));
        assert_eq!(serve.port, Some(8080));
    }

    #[test]
    fn test_compile_subcommand() {
        let cli = Cli::parse_from(["uiform", "compile", "form.yaml", "--pretty"]);
        match cli.command {
            Some(Command::Compile(args)) => {
                assert_eq!(args.input, PathBuf::from("form.yaml"));
                assert!(args.pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["uiform", "compile", "-", "--config", "other.toml"]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
