//! Command-line interface for categorycheck.

use clap::Parser;
use std::path::PathBuf;

use crate::report;
use crate::run::{self, DiscoveryError};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Static analysis checker for MSTest suites.
///
/// Categorycheck walks every C# source file belonging to a project and
/// reports each public [TestMethod] in a public [TestClass] that does not
/// carry a [TestCategory] attribute.
#[derive(Parser)]
#[command(name = "categorycheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the .csproj file whose sources should be checked
    pub project: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Run the check and map the outcome to an exit code.
pub fn run_check(cli: &Cli) -> anyhow::Result<i32> {
    if cli.format != "pretty" && cli.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    let result = match run::run_analysis(&cli.project) {
        Ok(result) => result,
        Err(e @ DiscoveryError::ProjectNotFound(_)) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let project = cli.project.to_string_lossy();
    match cli.format.as_str() {
        "json" => report::write_json(&project, &result)?,
        _ => report::write_pretty(&project, &result),
    }

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}
