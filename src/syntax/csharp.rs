//! C# parsing using tree-sitter.
//!
//! Builds the `SyntaxTree` data model from raw source text. Namespace names
//! are extracted with a tree-sitter query; class and method declarations are
//! collected with a recursive child walk so declaration order and nesting
//! are preserved exactly as written.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use super::{AttributeRef, ClassDecl, Member, MethodDecl, SyntaxTree};

/// Tree-sitter query for block-scoped namespace declarations.
///
/// File-scoped namespaces (`namespace N;`) are a different node kind and are
/// deliberately not matched; only `namespace N { }` blocks contribute a
/// namespace context.
const NAMESPACE_QUERY: &str = r#"
(namespace_declaration
  name: (_) @namespace_name
)
"#;

/// The text could not be turned into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("tree-sitter rejected the C# grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("malformed namespace query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    #[error("parser produced no tree")]
    NoTree,
}

/// Parse one file's source text into a `SyntaxTree`.
///
/// Tree-sitter is error-tolerant: source with localized syntax errors still
/// yields a best-effort tree, and that tree is returned rather than an
/// error. `ParseError` is reserved for the parser itself failing.
pub fn parse(source: &str) -> Result<SyntaxTree, ParseError> {
    let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
    let mut parser = Parser::new();
    parser.set_language(&language)?;

    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    let namespaces = extract_namespaces(&language, root, source)?;
    let mut members = Vec::new();
    collect_members(root, source, &mut members, false);

    Ok(SyntaxTree {
        namespaces,
        members,
    })
}

/// All block-scoped namespace names in document order.
fn extract_namespaces(
    language: &Language,
    root: Node,
    source: &str,
) -> Result<Vec<String>, ParseError> {
    let query = Query::new(language, NAMESPACE_QUERY)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root, source.as_bytes());

    let mut namespaces = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let name = query.capture_names()[capture.index as usize];
            if name == "namespace_name" {
                namespaces.push(node_text(capture.node, source).to_string());
            }
        }
    }
    Ok(namespaces)
}

/// Recursive walk collecting class declarations at any nesting depth.
///
/// `direct` is true when `node` is a class body, so that method declarations
/// are attached only to the class that directly declares them. Everything
/// else (namespace bodies, structs, whatever error recovery produced) is
/// descended through transparently.
fn collect_members(node: Node, source: &str, out: &mut Vec<Member>, direct: bool) {
    let mut walk = node.walk();
    for child in node.named_children(&mut walk) {
        match child.kind() {
            "class_declaration" => {
                out.push(Member::Class(build_class(child, source)));
            }
            "method_declaration" if direct => {
                out.push(Member::Method(build_method(child, source)));
            }
            _ => collect_members(child, source, out, false),
        }
    }
}

fn build_class(node: Node, source: &str) -> ClassDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();

    let mut members = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        collect_members(body, source, &mut members, true);
    }

    ClassDecl {
        name,
        is_public: has_public_modifier(node, source),
        attributes: extract_attributes(node, source),
        members,
    }
}

fn build_method(node: Node, source: &str) -> MethodDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();

    MethodDecl {
        name,
        is_public: has_public_modifier(node, source),
        attributes: extract_attributes(node, source),
    }
}

/// Whether a declaration node carries the `public` modifier.
fn has_public_modifier(node: Node, source: &str) -> bool {
    let mut walk = node.walk();
    let found = node
        .children(&mut walk)
        .any(|c| c.kind() == "modifier" && node_text(c, source) == "public");
    found
}

/// Attributes attached to a declaration, in written order. Each entry is the
/// attribute's written name without its argument list.
fn extract_attributes(node: Node, source: &str) -> Vec<AttributeRef> {
    let mut attributes = Vec::new();
    let mut walk = node.walk();
    for child in node.children(&mut walk) {
        if child.kind() != "attribute_list" {
            continue;
        }
        let mut inner = child.walk();
        for attr in child.named_children(&mut inner) {
            if attr.kind() != "attribute" {
                continue;
            }
            let name = attr
                .child_by_field_name("name")
                .map(|n| node_text(n, source).to_string())
                .unwrap_or_default();
            attributes.push(AttributeRef { name });
        }
    }
    attributes
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::has_attribute;

    fn classes(tree: &SyntaxTree) -> Vec<&ClassDecl> {
        fn visit<'a>(members: &'a [Member], out: &mut Vec<&'a ClassDecl>) {
            for m in members {
                if let Member::Class(c) = m {
                    out.push(c);
                    visit(&c.members, out);
                }
            }
        }
        let mut out = Vec::new();
        visit(&tree.members, &mut out);
        out
    }

    #[test]
    fn test_grammar_loads_into_linked_runtime() {
        // Guards the tree-sitter / tree-sitter-c-sharp version pair: an ABI
        // mismatch makes set_language fail and every parse error out.
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .expect("C# grammar ABI must be loadable by the linked tree-sitter");
    }

    #[test]
    fn test_parse_namespace_and_class() {
        let source = r#"
namespace Sample.Tests
{
    [TestClass]
    public class CalculatorTests
    {
        [TestMethod]
        public void Adds() { }
    }
}
"#;
        let tree = parse(source).unwrap();
        assert_eq!(tree.namespace_context(), "Sample.Tests");

        let all = classes(&tree);
        assert_eq!(all.len(), 1);
        let class = all[0];
        assert_eq!(class.name, "CalculatorTests");
        assert!(class.is_public);
        assert!(has_attribute(&class.attributes, "TestClass"));

        match &class.members[0] {
            Member::Method(m) => {
                assert_eq!(m.name, "Adds");
                assert!(m.is_public);
                assert!(has_attribute(&m.attributes, "TestMethod"));
            }
            other => panic!("expected a method member, got {:?}", other),
        }
    }

    #[test]
    fn test_first_namespace_wins() {
        let source = r#"
namespace First { public class A { } }
namespace Second { public class B { } }
"#;
        let tree = parse(source).unwrap();
        assert_eq!(tree.namespaces, vec!["First", "Second"]);
        assert_eq!(tree.namespace_context(), "First");
    }

    #[test]
    fn test_no_namespace_is_empty_context() {
        let tree = parse("public class Standalone { }").unwrap();
        assert_eq!(tree.namespace_context(), "");
        assert_eq!(classes(&tree).len(), 1);
    }

    #[test]
    fn test_file_scoped_namespace_not_counted() {
        let source = r#"
namespace FileScoped;

public class A { }
"#;
        let tree = parse(source).unwrap();
        assert_eq!(tree.namespace_context(), "");
    }

    #[test]
    fn test_attribute_with_arguments_keeps_bare_name() {
        let source = r#"
[TestClass]
public class C
{
    [TestMethod]
    [TestCategory("Unit")]
    public void A() { }
}
"#;
        let tree = parse(source).unwrap();
        let class = classes(&tree)[0];
        let Member::Method(method) = &class.members[0] else {
            panic!("expected a method");
        };
        assert!(has_attribute(&method.attributes, "TestCategory"));
    }

    #[test]
    fn test_modifiers() {
        let source = r#"
internal class Hidden
{
    private void Secret() { }
    public void Open() { }
}
"#;
        let tree = parse(source).unwrap();
        let class = classes(&tree)[0];
        assert!(!class.is_public);

        let publics: Vec<bool> = class
            .members
            .iter()
            .filter_map(|m| match m {
                Member::Method(m) => Some(m.is_public),
                _ => None,
            })
            .collect();
        assert_eq!(publics, vec![false, true]);
    }

    #[test]
    fn test_nested_class_is_reachable() {
        let source = r#"
public class Outer
{
    public class Inner
    {
        public void M() { }
    }
}
"#;
        let tree = parse(source).unwrap();
        let all = classes(&tree);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Outer");
        assert_eq!(all[1].name, "Inner");
    }

    #[test]
    fn test_methods_attach_to_declaring_class_only() {
        let source = r#"
public class Outer
{
    public void OuterMethod() { }

    public class Inner
    {
        public void InnerMethod() { }
    }
}
"#;
        let tree = parse(source).unwrap();
        let all = classes(&tree);
        let outer_methods: Vec<&str> = all[0]
            .members
            .iter()
            .filter_map(|m| match m {
                Member::Method(m) => Some(m.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(outer_methods, vec!["OuterMethod"]);
    }

    #[test]
    fn test_broken_source_still_yields_tree() {
        // tree-sitter recovers around the garbage; the valid class survives
        let source = r#"
public class Ok { public void M() { } }
this is not C# at all $$$
"#;
        let tree = parse(source).unwrap();
        assert!(classes(&tree).iter().any(|c| c.name == "Ok"));
    }
}
