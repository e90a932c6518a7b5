use crate::app_error::AppError;
use crate::notebook;
use crate::status;
use crate::version;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Generator, generate};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sweep",
    version = version::VALUE,
    about = "Project hygiene checks for status files and notebooks",
    styles = clap_styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that a status file carries the required keys
    Check(CheckArgs),
    /// Strip outputs and execution counts from a notebook, in place
    Strip(StripArgs),
    Version,
    Completion(CompletionArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    path: PathBuf,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct StripArgs {
    path: PathBuf,
}

#[derive(Debug, Args)]
struct CompletionArgs {
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

fn clap_styles() -> Styles {
    Styles::plain()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
}

pub fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Strip(args) => run_strip(args),
        Commands::Version => {
            println!("{}", version::VALUE);
            Ok(())
        }
        Commands::Completion(args) => run_completion(args),
    }
}

fn run_check(args: CheckArgs) -> Result<(), AppError> {
    #[derive(Serialize)]
    struct CheckOutput<'a> {
        valid: bool,
        status: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        missing: Option<&'a [&'a str]>,
    }

    let path_text = args.path.display().to_string();

    let doc = status::load(&args.path).map_err(AppError::runtime)?;
    let missing = status::missing_keys(&doc).map_err(AppError::runtime)?;

    if missing.is_empty() {
        if args.json {
            let output = CheckOutput {
                valid: true,
                status: &path_text,
                missing: None,
            };
            write_json(&output)?;
        } else {
            println!("OK");
        }
        return Ok(());
    }

    if args.json {
        let output = CheckOutput {
            valid: false,
            status: &path_text,
            missing: Some(missing.as_slice()),
        };
        write_json(&output)?;
    } else {
        println!("FAIL missing={}", status::format_missing(&missing));
    }

    Err(AppError::usage(format!(
        "status file {path_text} is missing required keys"
    )))
}

fn run_strip(args: StripArgs) -> Result<(), AppError> {
    notebook::strip_file(&args.path).map_err(AppError::runtime)
}

fn write_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)
        .map_err(|e| AppError::internal(format!("encode check json: {e}")))?;
    writeln!(stdout).map_err(|e| AppError::internal(format!("write output: {e}")))
}

fn run_completion(args: CompletionArgs) -> Result<(), AppError> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout().lock();

    match args.shell {
        Shell::Bash => generate_completion(clap_complete::shells::Bash, &mut cmd, &mut stdout),
        Shell::Zsh => generate_completion(clap_complete::shells::Zsh, &mut cmd, &mut stdout),
        Shell::Fish => generate_completion(clap_complete::shells::Fish, &mut cmd, &mut stdout),
        Shell::Powershell => {
            generate_completion(clap_complete::shells::PowerShell, &mut cmd, &mut stdout)
        }
    }
    .map_err(|e| AppError::internal(format!("generate completion: {e}")))
}

fn generate_completion<G: Generator>(
    generator: G,
    cmd: &mut clap::Command,
    writer: &mut impl Write,
) -> Result<(), io::Error> {
    generate(generator, cmd, "sweep", writer);
    writer.flush()
}
