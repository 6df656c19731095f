use crate::Position;

use super::{ast::StmtList, expressions::Expr};

/// Statement nodes. Each variant owns exactly the children its grammar rule
/// produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Block(BlockStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Decl(DeclStmt),
    Expr(ExprStmt),
}

impl Stmt {
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::If(stmt) => &stmt.position,
            Stmt::While(stmt) => &stmt.position,
            Stmt::For(stmt) => &stmt.position,
            Stmt::Block(stmt) => &stmt.position,
            Stmt::Return(stmt) => &stmt.position,
            Stmt::Break(stmt) => &stmt.position,
            Stmt::Decl(stmt) => &stmt.position,
            Stmt::Expr(stmt) => &stmt.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub position: Position,
    pub predicate: Expr,
    pub then_stmt: Box<Stmt>,
    pub else_stmt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub position: Position,
    pub predicate: Expr,
    pub body: Box<Stmt>,
}

/// `for (start; terminate; increment) body`, every clause optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub position: Position,
    pub start: Option<Expr>,
    pub terminate: Option<Expr>,
    pub increment: Option<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub position: Position,
    pub body: StmtList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub position: Position,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub position: Position,
}

/// `var name = init;`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub position: Position,
    pub name: String,
    pub init: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub position: Position,
    pub expression: Expr,
}
