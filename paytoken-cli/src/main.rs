//! Paytoken CLI
//!
//! Command-line interface for computing and checking payment-gateway
//! notification tokens.

use anyhow::Result;
use clap::{Parser, Subcommand};
use paytoken_cli::{commands, ui};

#[derive(Parser)]
#[command(name = "paytoken")]
#[command(about = "Compute and verify payment-gateway notification tokens", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Shared secret (terminal password); defaults to the PAYTOKEN_SECRET env var
    #[arg(long, global = true)]
    secret: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token for a payload
    Compute {
        /// JSON payload file, or '-' for stdin
        payload: String,
    },

    /// Check a payload's token; exits with status 1 on mismatch
    Verify {
        /// JSON payload file, or '-' for stdin
        payload: String,

        /// Token delivered outside the payload (overrides its Token field)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Print the payload with its Token field set
    Sign {
        /// JSON payload file, or '-' for stdin
        payload: String,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable
    let filter = if cli.verbose {
        "paytoken_cli=debug,paytoken_lib=debug"
    } else {
        "paytoken_cli=warn,paytoken_lib=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 0 = ok, 1 = token mismatch, 2 = usage or input error
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            ui::error(&format!("{:#}", e));
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let verifier = commands::load_verifier(cli.secret.as_deref())?;

    match cli.command {
        Commands::Compute { payload } => {
            commands::compute::run(&verifier, &payload, cli.verbose)?;
        }
        Commands::Verify { payload, token } => {
            return commands::verify::run(&verifier, &payload, token.as_deref(), cli.verbose);
        }
        Commands::Sign { payload, pretty } => {
            commands::sign::run(&verifier, &payload, pretty)?;
        }
    }

    Ok(true)
}
