//! Treeviz formatter for AST nodes
//!
//! One line per node, `<connector> <NodeType>: <label>`, indented with
//! box-drawing guides:
//!
//! ```text
//! └─ ExpressionStatement: add
//!   └─ CallExpression: add
//!     ├─ Identifier: add
//!     └─ NumberLiteral: 2
//! ```

use crate::ast::{source, target, AstNode};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn append_line(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.display_label(), MAX_LABEL_CHARS)
    ));
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

pub fn source_to_treeviz_str(program: &source::Program) -> String {
    let mut result = String::new();
    append_source_children(&mut result, &program.body, "");
    result
}

fn append_source_children(result: &mut String, children: &[source::Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let new_prefix = append_line(result, child, prefix, is_last);
        append_source_children(result, child.children(), &new_prefix);
    }
}

pub fn target_to_treeviz_str(program: &target::Program) -> String {
    let mut result = String::new();
    append_target_children(&mut result, &program.body, "");
    result
}

fn append_target_children(result: &mut String, children: &[target::Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_target_node(result, child, prefix, is_last);
    }
}

fn append_target_node(result: &mut String, node: &target::Node, prefix: &str, is_last: bool) {
    let new_prefix = append_line(result, node, prefix, is_last);
    match node {
        target::Node::Program(program) => {
            append_target_children(result, &program.body, &new_prefix);
        }
        target::Node::ExpressionStatement(statement) => {
            append_target_call(result, &statement.expression, &new_prefix, true);
        }
        target::Node::CallExpression(call) => {
            append_call_parts(result, call, &new_prefix);
        }
        target::Node::Identifier(_)
        | target::Node::NumberLiteral(_)
        | target::Node::StringLiteral(_) => {}
    }
}

fn append_target_call(
    result: &mut String,
    call: &target::CallExpression,
    prefix: &str,
    is_last: bool,
) {
    let new_prefix = append_line(result, call, prefix, is_last);
    append_call_parts(result, call, &new_prefix);
}

// The callee is listed first, ahead of the arguments
fn append_call_parts(result: &mut String, call: &target::CallExpression, prefix: &str) {
    append_line(result, &call.callee, prefix, call.arguments.is_empty());
    append_target_children(result, &call.arguments, prefix);
}
