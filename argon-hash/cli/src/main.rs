//! CLI for creating, verifying, and inspecting Argon2id password hashes.
//!
//! ## Usage
//!
//! ```bash
//! # Hash a password with the default parameters
//! ah hash "mysecret"
//! echo "mysecret" | ah hash -
//!
//! # Hash with custom costs
//! ah hash --memory 131072 --iterations 3 "mysecret"
//!
//! # Verify a password (exit 0 on match, 1 on mismatch, 2 on error)
//! ah verify '$argon2id$v=19$...' "mysecret"
//!
//! # Show the parameters a hash was made with
//! ah inspect '$argon2id$v=19$...'
//!
//! # Generate shell completions
//! source <(COMPLETE=bash ah)
//! ```

mod config;

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use argon_hash::{check_hash, create_hash, decode_hash, needs_rehash};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use crate::config::ParamArgs;

/// Create, verify, and inspect Argon2id password hashes
#[derive(Parser)]
#[command(name = "ah", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    params: ParamArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash a password with a fresh random salt
    Hash {
        /// Password to hash (use "-" or pipe to read from stdin)
        #[arg(value_name = "PASSWORD")]
        password: Option<String>,
    },

    /// Verify a password against an encoded hash
    Verify {
        /// Encoded hash ($argon2id$v=19$...)
        #[arg(value_name = "HASH")]
        hash: String,

        /// Password to check (use "-" or pipe to read from stdin)
        #[arg(value_name = "PASSWORD")]
        password: Option<String>,
    },

    /// Print the parameters stored in an encoded hash
    Inspect {
        /// Encoded hash ($argon2id$v=19$...)
        #[arg(value_name = "HASH")]
        hash: String,

        /// Also report whether the hash differs from the configured parameters
        #[arg(long)]
        against_config: bool,
    },
}

const AFTER_HELP: &str = "\
PARAMETERS:
  Defaults: m=65536 KiB, t=1, p=2, 16-byte salt, 32-byte digest.
  A TOML file (--config, or <config dir>/argon-hash/params.toml) may set any of
  memory_cost_kib, iterations, parallelism, salt_length, digest_length.
  Flags override the file.

EXIT STATUS (verify):
  0  password matches
  1  password does not match
  2  the hash could not be decoded or verified

SHELL COMPLETIONS:
  Bash (~/.bashrc):
    source <(COMPLETE=bash ah)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh ah)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish ah | source
";

/// Exit code for errors, distinct from a plain mismatch.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        return generate_completions(&shell_name);
    }

    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Hash { password } => {
            let params = cli.params.resolve()?;
            let password = read_password(password.as_deref())?;
            let hash = create_hash(&password, &params).wrap_err("Failed to hash password")?;
            println!("{hash}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { hash, password } => {
            let password = read_password(password.as_deref())?;
            let (matched, _) =
                check_hash(&password, hash.trim()).wrap_err("Failed to verify password")?;
            if matched {
                println!("match");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("mismatch");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Inspect {
            hash,
            against_config,
        } => {
            let hash = hash.trim();
            let decoded = decode_hash(hash).wrap_err("Failed to decode hash")?;
            let params = decoded.params;
            println!("memory_cost_kib: {}", params.memory_cost_kib);
            println!("iterations: {}", params.iterations);
            println!("parallelism: {}", params.parallelism);
            println!("salt_length: {}", params.salt_length);
            println!("digest_length: {}", params.digest_length);
            if against_config {
                let target = cli.params.resolve()?;
                println!("rehash: {}", needs_rehash(hash, &target)?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Get the password from the positional arg or stdin. Empty passwords are
/// rejected on both paths.
fn read_password(arg: Option<&str>) -> Result<String> {
    let password = match arg {
        Some("-") => read_from_stdin()?,
        Some(password) => password.to_string(),
        None => {
            if !io::stdin().is_terminal() {
                read_from_stdin()?
            } else {
                return Err(eyre!(
                    "No password provided. Use a positional argument or pipe to stdin."
                ));
            }
        }
    };

    if password.is_empty() {
        return Err(eyre!("Password must not be empty"));
    }
    Ok(password)
}

/// Read the first line from stdin, without its line terminator.
fn read_from_stdin() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .wrap_err("Failed to read from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,argon_hash=info,ah=info".to_string(),
            2 => "info,argon_hash=debug,ah=debug".to_string(),
            _ => "debug,argon_hash=trace,ah=trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Generate shell completions.
fn generate_completions(shell_name: &str) -> ExitCode {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            );
            return ExitCode::from(EXIT_ERROR);
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "ah", &mut io::stdout());
    ExitCode::SUCCESS
}
