use std::fmt::Display;

use crate::Position;

use super::ast::ExprList;

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    ConstInt(ConstIntExpr),
    ConstBoolean(ConstBooleanExpr),
    ConstString(ConstStringExpr),
    Var(VarExpr),
    Assign(AssignExpr),
    Dispatch(DispatchExpr),
    New(NewExpr),
    Cast(CastExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
}

impl Expr {
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::ConstInt(expr) => &expr.position,
            Expr::ConstBoolean(expr) => &expr.position,
            Expr::ConstString(expr) => &expr.position,
            Expr::Var(expr) => &expr.position,
            Expr::Assign(expr) => &expr.position,
            Expr::Dispatch(expr) => &expr.position,
            Expr::New(expr) => &expr.position,
            Expr::Cast(expr) => &expr.position,
            Expr::Binary(expr) => &expr.position,
            Expr::Unary(expr) => &expr.position,
        }
    }
}

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct ConstIntExpr {
    pub position: Position,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstBooleanExpr {
    pub position: Position,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstStringExpr {
    pub position: Position,
    pub value: String,
}

// REFERENCES

/// A variable reference, optionally qualified (`this.x`, `super.x`).
///
/// `this` and `super` themselves are represented as an unqualified `VarExpr`
/// stored in `reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub position: Position,
    pub reference: Option<Box<Expr>>,
    pub name: String,
}

impl VarExpr {
    /// Name of the qualifier (`this` or `super`), if any.
    pub fn reference_name(&self) -> Option<&str> {
        match self.reference.as_deref() {
            Some(Expr::Var(var)) => Some(&var.name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub position: Position,
    /// `this` or `super` when the target was qualified.
    pub reference: Option<String>,
    pub name: String,
    pub value: Box<Expr>,
}

/// A method call. `receiver` is `None` for calls on the implicit `this`.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchExpr {
    pub position: Position,
    pub receiver: Option<Box<Expr>>,
    pub method_name: String,
    pub arguments: ExprList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub position: Position,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub position: Position,
    pub target_type: String,
    pub expression: Box<Expr>,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    Modulus,
    Lt,
    Gt,
    Leq,
    Geq,
    Eq,
    Ne,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulus => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Leq => "<=",
            BinaryOp::Geq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Plus | BinaryOp::Minus | BinaryOp::Times | BinaryOp::Divide | BinaryOp::Modulus
        )
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Leq | BinaryOp::Geq | BinaryOp::Eq | BinaryOp::Ne
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub position: Position,
    pub operator: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Not,
    Increment,
    Decrement,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub position: Position,
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    /// Only ever true for `Increment`/`Decrement` written after the operand.
    pub postfix: bool,
}
