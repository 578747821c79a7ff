use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use us2uk::cli::output::{self, OutputFormat};
use us2uk::cli::{self, FileReport, Mode};
use us2uk::{Config, Converter, Strategy};

#[derive(Parser, Debug)]
#[command(name = "us2uk")]
#[command(version, about = "Convert US English spellings to UK English", long_about = None)]
struct Cli {
    /// Files or directories to convert (reads stdin when omitted)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing them
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// Report US spellings without converting
    #[arg(short, long)]
    check: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if US spellings are found
    #[arg(long, requires = "check")]
    no_fail: bool,

    /// Output format for --check (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Dictionary CSV with `us` and `uk` columns
    #[arg(short, long, env = "US2UK_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Word to leave unconverted
    #[arg(long, value_name = "WORD")]
    ignore: Vec<String>,

    /// How replacements are applied (global, per-token)
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Log dictionary loading and file processing
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary inspection
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// Show where the dictionary comes from and its size
    Info,
    /// Print the UK spelling of a word
    Lookup {
        /// Word to look up (casing is carried over)
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "us2uk", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.dictionary.clone(), cli.ignore.clone(), cli.strategy)?;
    let converter = config
        .build_converter()
        .context("Failed to load dictionary")?;

    if let Some(command) = cli.command {
        return handle_command(command, &config, &converter);
    }

    let mode = if cli.check {
        Mode::Check
    } else if cli.write {
        Mode::Write
    } else {
        Mode::Print
    };
    let colored = !cli.no_color;

    let reports = if cli.files.is_empty() {
        if mode == Mode::Write {
            anyhow::bail!("--write needs at least one file.");
        }
        vec![read_stdin(&converter, mode)?]
    } else {
        let files = cli::collect_files(&cli.files);
        if files.is_empty() {
            anyhow::bail!("No readable files given. Use --help for usage information.");
        }
        cli::process_files(&converter, &files, mode)
            .into_iter()
            .collect::<Result<Vec<_>>>()?
    };

    match mode {
        Mode::Print => {
            let mut stdout = io::stdout().lock();
            for report in &reports {
                if let Some(text) = &report.output {
                    stdout.write_all(text.as_bytes())?;
                }
            }
            stdout.flush()?;
        }
        Mode::Write => {
            let total: usize = reports.iter().map(|r| r.result.converted_count).sum();
            let changed = reports.iter().filter(|r| r.result.converted_count > 0).count();
            output::print_write_summary(total, changed, colored);
        }
        Mode::Check => {
            output::print_findings(&reports, colored, &cli.format)?;
            let total: usize = reports.iter().map(|r| r.result.finding_count).sum();
            if cli.format == OutputFormat::Text {
                output::print_check_summary(total, reports.len(), colored);
            }

            // Exit with appropriate code
            if total > 0 && !cli.no_fail {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn read_stdin(converter: &Converter, mode: Mode) -> Result<FileReport> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;

    Ok(cli::process_bytes(converter, Path::new("<stdin>"), &bytes, mode)?)
}

fn handle_command(command: Commands, config: &Config, converter: &Converter) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::Info => {
                let source = config
                    .dictionary
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string());
                println!("Dictionary: {}", source);
                for extra in &config.extra_dictionaries {
                    println!("  + {}", extra.display());
                }
                println!("  Entries: {}", converter.dictionary().len());
                println!("  Ignored: {}", config.ignore_words.len());
                println!("  Strategy: {}", converter.strategy());
                if let Some(path) = Config::global_config_path() {
                    println!("  Global config: {}", path.display());
                }
            }
            DictCommands::Lookup { word } => match converter.translate(&word) {
                Some(uk) => println!("{}", uk),
                None => {
                    eprintln!("'{}' has no UK spelling in the dictionary", word);
                    std::process::exit(1);
                }
            },
        },
    }
    Ok(())
}
