//! Traversal protocol for the AST.
//!
//! A pass implements [`Visitor`] and overrides only the node kinds it cares
//! about. Every `visit_*` method defaults to the matching `walk_*` function,
//! which visits the node's children in declaration order, discards what
//! they return and returns `Output::default()`. A pass that produces values
//! combines child results in its own `visit_*` methods. Overriding a method
//! without calling its `walk_*` function stops the descent at that node.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Default)]
//! struct BreakCounter { count: usize }
//!
//! impl Visitor for BreakCounter {
//!     type Output = ();
//!
//!     fn visit_break_stmt(&mut self, _node: &BreakStmt) {
//!         self.count += 1;
//!     }
//! }
//!
//! let mut counter = BreakCounter::default();
//! program.accept(&mut counter);
//! ```

use super::{
    ast::{Class, Field, Formal, Member, Method, NodeList, Program},
    expressions::{
        AssignExpr, BinaryExpr, CastExpr, ConstBooleanExpr, ConstIntExpr, ConstStringExpr,
        DispatchExpr, Expr, NewExpr, UnaryExpr, VarExpr,
    },
    statements::{
        BlockStmt, BreakStmt, DeclStmt, ExprStmt, ForStmt, IfStmt, ReturnStmt, Stmt, WhileStmt,
    },
};

pub trait Visitor {
    /// Result produced for each visited node.
    type Output: Default;

    // === Declarations ===

    fn visit_program(&mut self, node: &Program) -> Self::Output {
        walk_program(self, node)
    }

    fn visit_class(&mut self, node: &Class) -> Self::Output {
        walk_class(self, node)
    }

    fn visit_field(&mut self, node: &Field) -> Self::Output {
        walk_field(self, node)
    }

    fn visit_method(&mut self, node: &Method) -> Self::Output {
        walk_method(self, node)
    }

    fn visit_formal(&mut self, _node: &Formal) -> Self::Output {
        Self::Output::default()
    }

    // === Statements ===

    fn visit_if_stmt(&mut self, node: &IfStmt) -> Self::Output {
        walk_if_stmt(self, node)
    }

    fn visit_while_stmt(&mut self, node: &WhileStmt) -> Self::Output {
        walk_while_stmt(self, node)
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) -> Self::Output {
        walk_for_stmt(self, node)
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) -> Self::Output {
        walk_block_stmt(self, node)
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) -> Self::Output {
        walk_return_stmt(self, node)
    }

    fn visit_break_stmt(&mut self, _node: &BreakStmt) -> Self::Output {
        Self::Output::default()
    }

    fn visit_decl_stmt(&mut self, node: &DeclStmt) -> Self::Output {
        walk_decl_stmt(self, node)
    }

    fn visit_expr_stmt(&mut self, node: &ExprStmt) -> Self::Output {
        walk_expr_stmt(self, node)
    }

    // === Expressions ===

    fn visit_const_int_expr(&mut self, _node: &ConstIntExpr) -> Self::Output {
        Self::Output::default()
    }

    fn visit_const_boolean_expr(&mut self, _node: &ConstBooleanExpr) -> Self::Output {
        Self::Output::default()
    }

    fn visit_const_string_expr(&mut self, _node: &ConstStringExpr) -> Self::Output {
        Self::Output::default()
    }

    fn visit_var_expr(&mut self, node: &VarExpr) -> Self::Output {
        walk_var_expr(self, node)
    }

    fn visit_assign_expr(&mut self, node: &AssignExpr) -> Self::Output {
        walk_assign_expr(self, node)
    }

    fn visit_dispatch_expr(&mut self, node: &DispatchExpr) -> Self::Output {
        walk_dispatch_expr(self, node)
    }

    fn visit_new_expr(&mut self, _node: &NewExpr) -> Self::Output {
        Self::Output::default()
    }

    fn visit_cast_expr(&mut self, node: &CastExpr) -> Self::Output {
        walk_cast_expr(self, node)
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> Self::Output {
        walk_binary_expr(self, node)
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpr) -> Self::Output {
        walk_unary_expr(self, node)
    }
}

/// Double dispatch entry point: routes a node to the visitor method for its
/// concrete kind.
pub trait Accept {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}

impl Accept for Program {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(self)
    }
}

impl Accept for Class {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_class(self)
    }
}

impl Accept for Member {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Member::Field(field) => visitor.visit_field(field),
            Member::Method(method) => visitor.visit_method(method),
        }
    }
}

impl Accept for Field {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_field(self)
    }
}

impl Accept for Method {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_method(self)
    }
}

impl Accept for Formal {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_formal(self)
    }
}

impl Accept for Stmt {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
            Stmt::While(stmt) => visitor.visit_while_stmt(stmt),
            Stmt::For(stmt) => visitor.visit_for_stmt(stmt),
            Stmt::Block(stmt) => visitor.visit_block_stmt(stmt),
            Stmt::Return(stmt) => visitor.visit_return_stmt(stmt),
            Stmt::Break(stmt) => visitor.visit_break_stmt(stmt),
            Stmt::Decl(stmt) => visitor.visit_decl_stmt(stmt),
            Stmt::Expr(stmt) => visitor.visit_expr_stmt(stmt),
        }
    }
}

impl Accept for Expr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::ConstInt(expr) => visitor.visit_const_int_expr(expr),
            Expr::ConstBoolean(expr) => visitor.visit_const_boolean_expr(expr),
            Expr::ConstString(expr) => visitor.visit_const_string_expr(expr),
            Expr::Var(expr) => visitor.visit_var_expr(expr),
            Expr::Assign(expr) => visitor.visit_assign_expr(expr),
            Expr::Dispatch(expr) => visitor.visit_dispatch_expr(expr),
            Expr::New(expr) => visitor.visit_new_expr(expr),
            Expr::Cast(expr) => visitor.visit_cast_expr(expr),
            Expr::Binary(expr) => visitor.visit_binary_expr(expr),
            Expr::Unary(expr) => visitor.visit_unary_expr(expr),
        }
    }
}

impl<T: Accept> Accept for NodeList<T> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        for item in self.iter() {
            item.accept(visitor);
        }
        V::Output::default()
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, node: &Program) -> V::Output {
    node.classes.accept(visitor);
    V::Output::default()
}

pub fn walk_class<V: Visitor + ?Sized>(visitor: &mut V, node: &Class) -> V::Output {
    node.members.accept(visitor);
    V::Output::default()
}

pub fn walk_field<V: Visitor + ?Sized>(visitor: &mut V, node: &Field) -> V::Output {
    if let Some(init) = &node.init {
        init.accept(visitor);
    }
    V::Output::default()
}

pub fn walk_method<V: Visitor + ?Sized>(visitor: &mut V, node: &Method) -> V::Output {
    node.formals.accept(visitor);
    node.body.accept(visitor);
    V::Output::default()
}

pub fn walk_if_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &IfStmt) -> V::Output {
    node.predicate.accept(visitor);
    node.then_stmt.accept(visitor);
    if let Some(else_stmt) = &node.else_stmt {
        else_stmt.accept(visitor);
    }
    V::Output::default()
}

pub fn walk_while_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &WhileStmt) -> V::Output {
    node.predicate.accept(visitor);
    node.body.accept(visitor);
    V::Output::default()
}

pub fn walk_for_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &ForStmt) -> V::Output {
    for clause in [&node.start, &node.terminate, &node.increment].into_iter().flatten() {
        clause.accept(visitor);
    }
    node.body.accept(visitor);
    V::Output::default()
}

pub fn walk_block_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &BlockStmt) -> V::Output {
    node.body.accept(visitor);
    V::Output::default()
}

pub fn walk_return_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &ReturnStmt) -> V::Output {
    if let Some(value) = &node.value {
        value.accept(visitor);
    }
    V::Output::default()
}

pub fn walk_decl_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &DeclStmt) -> V::Output {
    node.init.accept(visitor);
    V::Output::default()
}

pub fn walk_expr_stmt<V: Visitor + ?Sized>(visitor: &mut V, node: &ExprStmt) -> V::Output {
    node.expression.accept(visitor);
    V::Output::default()
}

pub fn walk_var_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &VarExpr) -> V::Output {
    if let Some(reference) = &node.reference {
        reference.accept(visitor);
    }
    V::Output::default()
}

pub fn walk_assign_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &AssignExpr) -> V::Output {
    node.value.accept(visitor);
    V::Output::default()
}

pub fn walk_dispatch_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &DispatchExpr) -> V::Output {
    if let Some(receiver) = &node.receiver {
        receiver.accept(visitor);
    }
    node.arguments.accept(visitor);
    V::Output::default()
}

pub fn walk_cast_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &CastExpr) -> V::Output {
    node.expression.accept(visitor);
    V::Output::default()
}

pub fn walk_binary_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &BinaryExpr) -> V::Output {
    node.left.accept(visitor);
    node.right.accept(visitor);
    V::Output::default()
}

pub fn walk_unary_expr<V: Visitor + ?Sized>(visitor: &mut V, node: &UnaryExpr) -> V::Output {
    node.operand.accept(visitor);
    V::Output::default()
}
