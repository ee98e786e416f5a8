use crate::error::{IqcheckError, Result};
use std::collections::BTreeSet;
use tree_sitter::{Node, Parser};

// Names that resolve to Python builtins are the language's vocabulary,
// not the student's.
const PYTHON_BUILTINS: &[&str] = &[
    "abs", "all", "any", "bin", "bool", "chr", "dict", "dir", "divmod", "enumerate", "exit",
    "filter", "float", "format", "frozenset", "getattr", "hasattr", "hash", "help", "hex", "id",
    "input", "int", "isinstance", "issubclass", "iter", "len", "list", "map", "max", "min",
    "next", "object", "oct", "open", "ord", "pow", "print", "quit", "range", "raw_input",
    "repr", "reversed", "round", "set", "setattr", "sorted", "str", "sum", "super", "tuple",
    "type", "vars", "xrange", "zip", "True", "False", "None",
];

/// Collects the distinct identifiers referenced in a student program:
/// assigned/declared names, uses and function parameters, excluding
/// builtins, attribute names and import clauses.
pub fn extract_identifiers(source: &str) -> Result<BTreeSet<String>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| IqcheckError::SourceParse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| IqcheckError::SourceParse("unable to parse program".to_string()))?;

    let mut names = BTreeSet::new();
    collect(tree.root_node(), source.as_bytes(), &mut names);
    tracing::debug!(count = names.len(), "extracted identifiers");
    Ok(names)
}

fn collect(node: Node, source: &[u8], names: &mut BTreeSet<String>) {
    if node.kind() == "identifier" && is_name_reference(&node) {
        if let Ok(text) = node.utf8_text(source) {
            if !PYTHON_BUILTINS.contains(&text) {
                names.insert(text.to_string());
            }
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, names);
    }
}

fn is_name_reference(node: &Node) -> bool {
    let Some(parent) = node.parent() else {
        return true;
    };
    match parent.kind() {
        // obj.attr: the attribute half is not a name the student declared
        "attribute" => field_is_not(&parent, "attribute", node),
        "keyword_argument" => field_is_not(&parent, "name", node),
        "function_definition" | "class_definition" => field_is_not(&parent, "name", node),
        "import_statement" | "import_from_statement" | "aliased_import" | "dotted_name" => false,
        _ => true,
    }
}

fn field_is_not(parent: &Node, field: &str, node: &Node) -> bool {
    parent
        .child_by_field_name(field)
        .map(|child| child.id() != node.id())
        .unwrap_or(true)
}
