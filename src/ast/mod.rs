/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, class and member nodes, plus the node lists
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - visitor: The traversal protocol passes use to walk the tree
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod visitor;
