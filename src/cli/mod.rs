pub mod output;

use crate::converter::{decode, Converter};
use crate::CheckResult;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the converted text
    Print,
    /// Rewrite files in place
    Write,
    /// Report US spellings without converting
    Check,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: CheckResult,
    /// Converted text in `Mode::Print`; in `Mode::Write` it is consumed by `process_file`
    pub output: Option<String>,
}

/// Expand directories into the files beneath them. Missing paths are reported and skipped.
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            continue;
        }

        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                    Ok(_) => {}
                    Err(e) => log::warn!("Skipping unreadable entry: {}", e),
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files
}

/// Run `mode` over every file in parallel. Reports keep the input order.
pub fn process_files(converter: &Converter, files: &[PathBuf], mode: Mode) -> Vec<Result<FileReport>> {
    files
        .par_iter()
        .map(|path| process_file(converter, path, mode))
        .collect()
}

pub fn process_file(converter: &Converter, path: &Path, mode: Mode) -> Result<FileReport> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    log::debug!("Processing {}", path.display());
    let mut report = process_bytes(converter, path, &bytes, mode)
        .with_context(|| format!("Failed to convert file: {}", path.display()))?;

    if mode == Mode::Write {
        if let Some(converted) = report.output.take() {
            if report.result.converted_count > 0 {
                fs::write(path, converted)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
            }
        }
    }

    Ok(report)
}

/// Check or convert raw input (stdin, or a file's contents).
///
/// Counts only words whose spelling actually changes.
pub fn process_bytes(
    converter: &Converter,
    label: &Path,
    bytes: &[u8],
    mode: Mode,
) -> crate::Result<FileReport> {
    let (result, output) = match mode {
        Mode::Print => (CheckResult::default(), Some(converter.convert_bytes(bytes)?)),
        Mode::Check => {
            let findings = converter.check(decode(bytes)?);
            let result = CheckResult {
                finding_count: findings.len(),
                converted_count: 0,
                findings,
            };
            (result, None)
        }
        Mode::Write => {
            let text = decode(bytes)?;
            let result = CheckResult {
                finding_count: 0,
                converted_count: converter.check(text).len(),
                findings: Vec::new(),
            };
            (result, Some(converter.convert(text)))
        }
    };

    Ok(FileReport {
        path: label.to_path_buf(),
        result,
        output,
    })
}
