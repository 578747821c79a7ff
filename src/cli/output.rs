use crate::cli::FileReport;
use crate::Finding;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFinding {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub word: String,
    pub replacement: String,
    pub context: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub files_checked: usize,
    pub total_findings: usize,
    pub findings: Vec<JsonFinding>,
}

pub fn to_json(reports: &[FileReport]) -> JsonOutput {
    let findings: Vec<JsonFinding> = reports
        .iter()
        .flat_map(|report| {
            report.result.findings.iter().map(move |f| JsonFinding {
                file: report.path.display().to_string(),
                line: f.line,
                column: f.column,
                word: f.word.clone(),
                replacement: f.replacement.clone(),
                context: f.context.clone(),
            })
        })
        .collect();

    JsonOutput {
        files_checked: reports.len(),
        total_findings: findings.len(),
        findings,
    }
}

pub fn print_findings(reports: &[FileReport], colored_output: bool, format: &OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                print_text_findings(&report.path, &report.result.findings, colored_output);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(reports))?),
    }
    Ok(())
}

fn print_text_findings(file_path: &Path, findings: &[Finding], colored_output: bool) {
    if findings.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for finding in findings {
        let line_info = format!("{}:{}", finding.line, finding.column);

        if colored_output {
            println!(
                "  {} {} {} {}",
                line_info.blue().bold(),
                finding.word.red().bold(),
                "→".dimmed(),
                finding.replacement.green()
            );
            println!("    {}", format_context(&finding.context, &finding.word, colored_output));
        } else {
            println!("  {} {} → {}", line_info, finding.word, finding.replacement);
            println!("    {}", finding.context);
        }
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

pub fn print_check_summary(total_findings: usize, files: usize, colored: bool) {
    eprintln!();
    if total_findings == 0 {
        if colored {
            eprintln!("{}", "✓ No US spellings found!".green().bold());
        } else {
            eprintln!("✓ No US spellings found!");
        }
    } else {
        let word = plural(total_findings, "US spelling", "US spellings");
        let file_word = plural(files, "file", "files");
        if colored {
            eprintln!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_findings.to_string().red().bold(),
                word,
                files,
                file_word
            );
        } else {
            eprintln!("✗ {} {} found in {} {}", total_findings, word, files, file_word);
        }
    }
}

pub fn print_write_summary(total_converted: usize, files: usize, colored: bool) {
    eprintln!();
    if total_converted == 0 {
        if colored {
            eprintln!("{}", "Nothing to convert!".green().bold());
        } else {
            eprintln!("Nothing to convert!");
        }
    } else {
        let word = plural(total_converted, "word", "words");
        let file_word = plural(files, "file", "files");
        if colored {
            eprintln!(
                "{} {} {} converted in {} {}",
                "✓".green().bold(),
                total_converted.to_string().green().bold(),
                word,
                files,
                file_word
            );
        } else {
            eprintln!("✓ {} {} converted in {} {}", total_converted, word, files, file_word);
        }
    }
}
