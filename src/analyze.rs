//! The compliance analyzer.
//!
//! Walks one file's `SyntaxTree` and reports every public `[TestMethod]`
//! inside a public `[TestClass]` that lacks a `[TestCategory]` attribute.
//! Pure classification over the data model: no I/O, deterministic, and
//! order-stable (classes as declared, methods as declared).

use serde::Serialize;

use crate::syntax::{has_attribute, ClassDecl, Member, SyntaxTree};

/// Attribute names that drive the check, matched literally.
pub const TEST_CLASS_ATTRIBUTE: &str = "TestClass";
pub const TEST_METHOD_ATTRIBUTE: &str = "TestMethod";
pub const TEST_CATEGORY_ATTRIBUTE: &str = "TestCategory";

/// One non-compliant method, identified by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// `namespace.class.method`, joined with literal dots. A file without a
    /// namespace produces a leading dot; this mirrors the join and is
    /// intentional.
    pub qualified_name: String,
}

/// Result of analyzing one file.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    /// The namespace context used for qualification (may be empty).
    pub namespace: String,
    /// Findings in declaration order.
    pub findings: Vec<Finding>,
}

/// The tree violated the parser's structural contract.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("qualifying class declaration has no name")]
    UnnamedClass,
    #[error("qualifying method in class '{class}' has no name")]
    UnnamedMethod { class: String },
}

/// Analyze one parsed file.
///
/// Classification rules:
/// - a class qualifies when it is declared `public` and carries an attribute
///   written exactly `TestClass`;
/// - a method qualifies when it is declared `public`, carries `TestMethod`,
///   and is declared directly inside a qualifying class;
/// - a qualifying method without a `TestCategory` attribute yields one
///   `Finding` named `namespace.class.method`.
///
/// Non-public declarations are excluded entirely, and methods inside
/// non-qualifying classes contribute nothing even when marked `TestMethod`.
pub fn analyze(tree: &SyntaxTree) -> Result<FileReport, AnalysisError> {
    let namespace = tree.namespace_context().to_string();
    let mut findings = Vec::new();
    visit_members(&tree.members, &namespace, &mut findings)?;
    Ok(FileReport {
        namespace,
        findings,
    })
}

/// Recursive walk so nested classes at any depth are considered.
fn visit_members(
    members: &[Member],
    namespace: &str,
    findings: &mut Vec<Finding>,
) -> Result<(), AnalysisError> {
    for member in members {
        if let Member::Class(class) = member {
            if is_test_class(class) {
                collect_class_findings(class, namespace, findings)?;
            }
            // Nested classes qualify independently of their parent.
            visit_members(&class.members, namespace, findings)?;
        }
    }
    Ok(())
}

fn is_test_class(class: &ClassDecl) -> bool {
    class.is_public && has_attribute(&class.attributes, TEST_CLASS_ATTRIBUTE)
}

fn collect_class_findings(
    class: &ClassDecl,
    namespace: &str,
    findings: &mut Vec<Finding>,
) -> Result<(), AnalysisError> {
    if class.name.is_empty() {
        return Err(AnalysisError::UnnamedClass);
    }

    for member in &class.members {
        let Member::Method(method) = member else {
            continue;
        };
        if !method.is_public || !has_attribute(&method.attributes, TEST_METHOD_ATTRIBUTE) {
            continue;
        }
        if method.name.is_empty() {
            return Err(AnalysisError::UnnamedMethod {
                class: class.name.clone(),
            });
        }
        if !has_attribute(&method.attributes, TEST_CATEGORY_ATTRIBUTE) {
            findings.push(Finding {
                qualified_name: format!("{}.{}.{}", namespace, class.name, method.name),
            });
        }
    }
    Ok(())
}
