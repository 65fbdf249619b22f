//! CLI command definitions and dispatch for the `chatline` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod history;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use chatline_observe::tracing_setup::LogFormat;

/// Chat with a local model and keep every exchange.
#[derive(Parser)]
#[command(name = "chatline", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format: text or json.
    #[arg(long, global = true, default_value = "text", env = "CHATLINE_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (default from config.toml, else 5000).
        #[arg(long, short)]
        port: Option<u16>,

        /// Host to bind to (default from config.toml, else 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },

    /// Print every stored conversation turn, oldest first.
    #[command(alias = "log")]
    History,

    /// Send one message, print the reply, and store the turn.
    Ask {
        /// The message to send.
        message: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Default log directives for a verbosity level when `RUST_LOG` is unset.
pub fn log_directives(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,chatline=debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["chatline", "serve", "--port", "8080", "--host", "0.0.0.0"])
            .unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_ask_with_global_flags() {
        let cli = Cli::try_parse_from(["chatline", "ask", "hello there", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Ask { ref message } if message == "hello there"));
    }

    #[test]
    fn test_log_directives() {
        assert_eq!(log_directives(0, true), "error");
        assert_eq!(log_directives(0, false), "warn");
        assert_eq!(log_directives(1, false), "info,chatline=debug");
        assert_eq!(log_directives(3, false), "trace");
    }
}
