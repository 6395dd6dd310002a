//! Output formatting for categorycheck results.
//!
//! Two formats:
//! - Pretty: colored terminal output, preserving the console shape the tool
//!   has always had
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::run::{FileError, RunResult};

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: String,
    pub project: String,
    pub files_scanned: usize,
    pub passed: bool,
    pub findings: Vec<&'a str>,
    pub errors: &'a [FileError],
}

impl<'a> JsonReport<'a> {
    pub fn new(project: &str, result: &'a RunResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            project: project.to_string(),
            files_scanned: result.files_scanned,
            passed: result.passed(),
            findings: result
                .findings
                .iter()
                .map(|f| f.qualified_name.as_str())
                .collect(),
            errors: &result.errors,
        }
    }
}

/// Write results in JSON format.
pub fn write_json(project: &str, result: &RunResult) -> anyhow::Result<()> {
    let report = JsonReport::new(project, result);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results in human-readable colored format.
pub fn write_pretty(project: &str, result: &RunResult) {
    println!("Analyzing project: '{}'", project);

    for error in &result.errors {
        eprintln!(
            "{} processing '{}': {}",
            "Error".red().bold(),
            error.file,
            error.message
        );
    }

    if result.passed() {
        println!();
        println!(
            "{}",
            "All TestMethods have the [TestCategory] attribute.".green()
        );
        return;
    }

    println!();
    println!(
        "{}",
        "Methods Missing [TestCategory] Attribute:".yellow().bold()
    );
    for finding in &result.findings {
        println!("- {}", finding.qualified_name);
    }
    println!();
    println!(
        "{} method(s) missing a category across {} file(s)",
        result.findings.len().to_string().red().bold(),
        result.files_scanned
    );
}
