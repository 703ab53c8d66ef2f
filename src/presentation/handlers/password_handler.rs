use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::{
    domain::{
        models::credential::StoredCredential,
        services::{password_generator::DEFAULT_GENERATED_LENGTH, password_service::PasswordHasher},
    },
    password_manager::PasswordManager,
};

/// Password hashing, verification, strength checks and generation
#[derive(Debug, Parser)]
#[command(name = "catalog-auth", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read a password from stdin and print its stored credential
    Hash,
    /// Read a password, then a stored credential, from stdin (one per line)
    /// and check them against each other
    Verify,
    /// Read a password from stdin and check it against the strength policy
    Check,
    /// Print a freshly generated password
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_GENERATED_LENGTH)]
        length: usize,
    },
}

/// Run one command. `Ok(false)` means the command completed but the answer
/// was negative (no match, weak password).
pub fn handle<H, R, W>(
    command: &Command,
    password_manager: &PasswordManager<H>,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool>
where
    H: PasswordHasher,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Hash => {
            let password = read_password(input)?;
            let stored = password_manager.hash_password(&password)?;
            writeln!(output, "{}", stored.as_str())?;
            Ok(true)
        }
        Command::Verify => {
            let password = read_password(input)?;
            // kept off argv so it never shows up in process listings
            let credential = StoredCredential::new(read_line(input, "stored credential")?);
            let matched = password_manager.verify_password(&password, &credential);
            writeln!(output, "{matched}")?;
            Ok(matched)
        }
        Command::Check => {
            let password = read_password(input)?;
            let verdict = password_manager.validate_password_strength(&password);
            writeln!(output, "{verdict}")?;
            Ok(verdict.is_acceptable())
        }
        Command::Generate { length } => {
            let password = password_manager.generate_password(*length)?;
            writeln!(output, "{password}")?;
            Ok(true)
        }
    }
}

fn read_password<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    read_line(input, "password")
}

/// Read a single line, without its line terminator
fn read_line<R: BufRead>(input: &mut R, what: &str) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {what} from stdin"))?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
