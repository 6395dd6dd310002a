//! Syntax data model consumed by the compliance analyzer.
//!
//! This module defines the read-only view of one parsed C# source file:
//! namespace declarations, class declarations with their modifiers and
//! attributes, and the methods declared directly inside them. The model is
//! built once per file by the `csharp` parser and dropped after analysis;
//! nothing here persists across files.

pub mod csharp;

pub use csharp::{parse, ParseError};

/// A marker attribute attached to a class or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRef {
    /// The attribute name exactly as written in source, without arguments
    /// (e.g. `TestCategory` for `[TestCategory("Unit")]`).
    pub name: String,
}

impl AttributeRef {
    /// Literal comparison against the written name. Qualified forms such as
    /// `Microsoft.VisualStudio.TestTools.UnitTesting.TestClass` do not match
    /// the bare simple name; no alias or type resolution is performed.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// A method declaration inside a class body.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    /// The method identifier.
    pub name: String,
    /// Whether the declaration carries the `public` modifier.
    pub is_public: bool,
    /// Attributes in declaration order.
    pub attributes: Vec<AttributeRef>,
}

/// A class declaration, possibly nested inside another class.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    /// The class identifier.
    pub name: String,
    /// Whether the declaration carries the `public` modifier.
    pub is_public: bool,
    /// Attributes in declaration order.
    pub attributes: Vec<AttributeRef>,
    /// Member declarations in declaration order. Only classes and methods
    /// are modeled; fields, properties and other members are not relevant
    /// to the check and are skipped at parse time.
    pub members: Vec<Member>,
}

/// A member declaration inside a class or namespace body.
#[derive(Debug, Clone)]
pub enum Member {
    Class(ClassDecl),
    Method(MethodDecl),
}

/// Parsed representation of one source file.
///
/// Document order is preserved everywhere: `namespaces` lists namespace
/// names in the order their declarations appear, and `members` lists
/// top-level declarations (classes under any namespace included) in source
/// order.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    /// Names of block-scoped namespace declarations, document order.
    pub namespaces: Vec<String>,
    /// Top-level members, document order. Classes declared inside namespace
    /// blocks appear here; the namespace nesting itself is flattened since
    /// only the first namespace name is ever used for qualification.
    pub members: Vec<Member>,
}

impl SyntaxTree {
    /// The namespace context for qualification: the first namespace
    /// declaration in document order, or the empty string if the file has
    /// none. Later namespace blocks in the same file are ignored.
    pub fn namespace_context(&self) -> &str {
        self.namespaces.first().map(String::as_str).unwrap_or("")
    }
}

/// Shared helper for the declaration structs: does any attribute match the
/// given written name.
pub fn has_attribute(attributes: &[AttributeRef], name: &str) -> bool {
    attributes.iter().any(|a| a.is_named(name))
}
