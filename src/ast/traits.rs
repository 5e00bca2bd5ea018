//! AST traits - Common interfaces for uniform node access

/// Common interface for all AST nodes in either dialect
pub trait AstNode {
    /// Kind name, identical to the serialized `"type"` field
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
