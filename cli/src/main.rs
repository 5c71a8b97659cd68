//! sffms2rtf CLI - sffms LaTeX manuscript to RTF converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use sffms2rtf::{output_path_for, parse_file, render};

#[derive(Parser)]
#[command(name = "sffms2rtf")]
#[command(version)]
#[command(about = "Convert an sffms LaTeX manuscript to submission-ready RTF", long_about = None)]
struct Cli {
    /// Main tex file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a manuscript to RTF
    Convert {
        /// Main tex file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input path with an .rtf extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show extracted manuscript metadata
    Info {
        /// Main tex file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match cli.input {
            Some(input) => cmd_convert(&input, None),
            None => {
                eprintln!("{}", "Incorrect input!".red().bold());
                eprintln!("Usage: sffms2rtf <FILE>");
                eprintln!("       sffms2rtf --help for more information");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let manuscript = parse_file(input)?;
    let rtf = render::to_rtf(&manuscript);

    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| output_path_for(input));
    fs::write(&output, rtf)?;

    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let manuscript = parse_file(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manuscript.metadata)?);
        return Ok(());
    }

    println!("{}", "Manuscript Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), manuscript.metadata.title);
    println!(
        "{}: {}",
        "Running title".bold(),
        manuscript.metadata.running_title
    );
    println!("{}: {}", "Author".bold(), manuscript.metadata.author);
    println!(
        "{}: {}",
        "Author name".bold(),
        manuscript.metadata.author_name
    );
    println!("{}: {}", "Surname".bold(), manuscript.metadata.surname);
    println!(
        "{}: {}",
        "Address".bold(),
        manuscript.metadata.address.replace('\n', ", ")
    );
    println!(
        "{}: {}",
        "Declared words".bold(),
        manuscript.metadata.word_count
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Paragraphs".bold(), manuscript.paragraph_count());
    println!(
        "{}: {}",
        "Estimated words".bold(),
        manuscript.estimated_word_count()
    );

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "sffms2rtf".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("sffms LaTeX manuscript to RTF converter");
}
