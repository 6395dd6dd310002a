//! Per-project orchestration.
//!
//! Ties the collaborators together: discover source files under the project
//! directory, parse and analyze each in order, and fold the per-file reports
//! into one `RunResult`. Failures are isolated to the file they occur in; a
//! malformed file never aborts the run.

use std::path::{Path, PathBuf};

use crate::analyze::{self, Finding};
use crate::collect;
use crate::syntax;

/// The project path itself could not be used. Fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("project file not found at '{}'", .0.display())]
    ProjectNotFound(PathBuf),
}

/// An error recorded against one source file. The file is skipped and the
/// run continues.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileError {
    pub file: String,
    pub message: String,
}

/// Aggregated outcome of one run.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Findings from all files that analyzed successfully, in file order
    /// then declaration order. Not deduplicated: distinct files can
    /// legitimately report the same fully-qualified name.
    pub findings: Vec<Finding>,
    /// One entry per file that failed to read, parse, or analyze.
    pub errors: Vec<FileError>,
    /// Number of source files considered.
    pub files_scanned: usize,
}

impl RunResult {
    /// A run passes when every test method that was checked is compliant.
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Analyze every C# source file belonging to a project.
///
/// `project_file` is the path to a `.csproj`; sources are discovered under
/// its parent directory. Files are processed one at a time in collector
/// order, and each file's outcome is independent of the others.
pub fn run_analysis(project_file: &Path) -> Result<RunResult, DiscoveryError> {
    if !project_file.is_file() {
        return Err(DiscoveryError::ProjectNotFound(project_file.to_path_buf()));
    }

    let project_dir = project_file.parent().unwrap_or(Path::new(""));
    // Collector errors on a readable root are I/O races; surface them as a
    // run with no scanned files rather than a crash.
    let files = match collect::collect_source_files(project_dir) {
        Ok(files) => files,
        Err(e) => {
            return Ok(RunResult {
                errors: vec![FileError {
                    file: project_dir.display().to_string(),
                    message: e.to_string(),
                }],
                ..RunResult::default()
            })
        }
    };

    let mut result = RunResult {
        files_scanned: files.len(),
        ..RunResult::default()
    };

    for file in &files {
        match process_file(file) {
            Ok(findings) => result.findings.extend(findings),
            Err(message) => result.errors.push(FileError {
                file: file.display().to_string(),
                message,
            }),
        }
    }

    Ok(result)
}

/// Read, parse, and analyze one file. Any failure is reduced to a message
/// recorded against the file's path.
fn process_file(path: &Path) -> Result<Vec<Finding>, String> {
    let source = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let tree = syntax::parse(&source).map_err(|e| e.to_string())?;
    let report = analyze::analyze(&tree).map_err(|e| e.to_string())?;
    Ok(report.findings)
}
