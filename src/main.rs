//! lexhl - print source files with rule-driven syntax highlighting

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use lexhl::config::Config;
use lexhl::error::{HighlightError, Result};
use lexhl::render;
use lexhl::{Language, SyntaxManager};

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    language: Option<String>,
    line_numbers: bool,
    list: bool,
    help: bool,
    version: bool,
    files: Vec<String>,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LEXHL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }
    if options.version {
        println!("lexhl {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::load()?;
    let mut manager = SyntaxManager::new();
    config.apply(&mut manager);

    if options.list {
        for lang in manager.languages() {
            let profile = manager.profile(lang)?;
            println!("{:<8} {}", lang.name(), profile.extensions().join(" "));
        }
        return Ok(());
    }

    if options.files.is_empty() {
        print_usage();
        return Err(HighlightError::Message("no input files".to_string()));
    }

    let forced = options.language.as_deref().map(str::parse::<Language>).transpose()?;
    let line_numbers = options.line_numbers || config.line_numbers;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for file in &options.files {
        let language = match forced {
            Some(lang) => lang,
            None => manager
                .detect_language(Path::new(file))
                .or_else(|| config.default_language())
                .ok_or_else(|| {
                    HighlightError::Message(format!(
                        "cannot detect language of {}; use --language",
                        file
                    ))
                })?,
        };

        let text = read_input(file)?;
        let lines: Vec<&str> = text.lines().collect();
        let results = manager.set_language(language, &lines[..])?;
        let width = lines.len().to_string().len();

        for (i, (line, spans)) in lines.iter().zip(&results).enumerate() {
            if line_numbers {
                render::write_line_number(&mut out, i + 1, width)?;
            }
            render::write_block(&mut out, line, spans)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Read a file, or stdin for `-`
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => options.help = true,
            "--version" | "-V" => options.version = true,
            "--line-numbers" | "-n" => options.line_numbers = true,
            "--list" => options.list = true,
            "--language" | "-l" => {
                let name = iter.next().ok_or_else(|| {
                    HighlightError::Message(format!("{} requires a language name", arg))
                })?;
                options.language = Some(name.clone());
            }
            "-" => options.files.push(arg.clone()),
            s if s.starts_with('-') => {
                return Err(HighlightError::Message(format!("unknown option: {}", s)));
            }
            _ => options.files.push(arg.clone()),
        }
    }

    if options.files.iter().any(|f| f == "-") && options.language.is_none() {
        return Err(HighlightError::Message(
            "reading stdin requires --language".to_string(),
        ));
    }

    Ok(options)
}

fn print_usage() {
    println!("lexhl {} - rule-driven syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: lexhl [OPTIONS] FILE...");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Highlight as NAME instead of detecting by extension");
    println!("  -n, --line-numbers   Prefix each line with its number");
    println!("      --list           List supported languages");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("A FILE of - reads standard input.");
    println!("Settings are read from ~/.lexhl.toml; LEXHL_LOG sets the log filter.");
}
