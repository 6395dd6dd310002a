//! Categorycheck - static analysis checker for MSTest suites.
//!
//! Given a .csproj path, categorycheck walks every C# source file under the
//! project directory and verifies that each public method carrying a
//! `[TestMethod]` attribute inside a public `[TestClass]` class also carries
//! a `[TestCategory]` attribute. Violations are reported as fully-qualified
//! `namespace.class.method` names.
//!
//! # Architecture
//!
//! - `collect`: source file discovery under the project directory
//! - `syntax`: tree-sitter backed C# parsing into a per-file data model
//! - `analyze`: the compliance analyzer - traversal and classification
//! - `run`: per-project orchestration with per-file failure isolation
//! - `report`: output formatting (pretty, JSON)
//!
//! The check is syntactic only: attributes are matched by their written
//! name, with no resolution of aliases or fully-qualified attribute types.

pub mod analyze;
pub mod cli;
pub mod collect;
pub mod report;
pub mod run;
pub mod syntax;

pub use analyze::{analyze, AnalysisError, FileReport, Finding};
pub use collect::collect_source_files;
pub use run::{run_analysis, DiscoveryError, FileError, RunResult};
pub use syntax::{parse, ParseError, SyntaxTree};
