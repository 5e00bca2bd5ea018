//! Depth-first traversal of the source tree
//!
//! The traverser owns the recursion and the insertion points; a [Visitor]
//! decides what each source node becomes. Each recursive call receives the
//! sequence its result must be appended to (its context), so nothing is ever
//! stored on the nodes themselves:
//!
//! - the root context is the new target program's body
//! - a call opens a [ContextScope] before its params are visited, and the
//!   params append into that scope
//! - when the params are done the scope is closed and the result is appended
//!   to the parent's context
//! - literals never open a scope
//!
//! Results are appended in visiting order, so argument order follows param
//! order exactly.

use crate::ast::source;
use crate::ast::target;
use crate::ast::{NumberLiteral, StringLiteral};
use crate::error::TransformError;

/// Logical parent of the node being visited
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    Program(&'a source::Program),
    Call(&'a source::CallExpression),
}

impl Parent<'_> {
    pub fn is_program(&self) -> bool {
        matches!(self, Parent::Program(_))
    }
}

/// Holder for a freshly built target node whose children are still being
/// collected
pub trait ContextScope {
    /// Sequence the children of the scope's node append into
    fn context(&mut self) -> &mut Vec<target::Node>;

    /// Finish the node once all children have been appended
    fn close(self) -> target::Node;
}

/// Rewrite rules, dispatched by source node kind
pub trait Visitor {
    type Scope: ContextScope;

    /// Build the target node for a call before its params are visited
    fn enter_call(
        &mut self,
        call: &source::CallExpression,
        parent: Parent<'_>,
    ) -> Result<Self::Scope, TransformError>;

    fn number_literal(
        &mut self,
        literal: &NumberLiteral,
        parent: Parent<'_>,
    ) -> Result<target::Node, TransformError>;

    fn string_literal(
        &mut self,
        literal: &StringLiteral,
        parent: Parent<'_>,
    ) -> Result<target::Node, TransformError>;
}

/// Walk `program` depth-first, building a target program with `visitor`
pub fn traverse<V: Visitor>(
    program: &source::Program,
    visitor: &mut V,
) -> Result<target::Program, TransformError> {
    let mut body = Vec::with_capacity(program.body.len());
    let parent = Parent::Program(program);
    for node in &program.body {
        traverse_node(node, parent, &mut body, visitor)?;
    }
    Ok(target::Program { body })
}

fn traverse_node<'a, V: Visitor>(
    node: &'a source::Node,
    parent: Parent<'a>,
    context: &mut Vec<target::Node>,
    visitor: &mut V,
) -> Result<(), TransformError> {
    match node {
        source::Node::Program(_) => return Err(TransformError::NestedProgram),
        source::Node::CallExpression(call) => {
            tracing::trace!(name = %call.name, params = call.params.len(), "entering call");
            let mut scope = visitor.enter_call(call, parent)?;
            for param in &call.params {
                traverse_node(param, Parent::Call(call), scope.context(), visitor)?;
            }
            context.push(scope.close());
        }
        source::Node::NumberLiteral(literal) => {
            context.push(visitor.number_literal(literal, parent)?);
        }
        source::Node::StringLiteral(literal) => {
            context.push(visitor.string_literal(literal, parent)?);
        }
    }
    Ok(())
}
