use std::{ops::Deref, rc::Rc, slice::Iter};

use crate::Position;

use super::{expressions::Expr, statements::Stmt};

/// An ordered, immutable sequence of nodes.
///
/// Lists are only built through [`ListBuilder`] and cannot be changed once
/// finished.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeList<T> {
    position: Position,
    items: Box<[T]>,
}

impl<T> NodeList<T> {
    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Deref for NodeList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Append-only builder for a [`NodeList`].
#[derive(Debug)]
pub struct ListBuilder<T> {
    position: Position,
    items: Vec<T>,
}

impl<T> ListBuilder<T> {
    pub fn new(position: Position) -> Self {
        ListBuilder {
            position,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn finish(self) -> NodeList<T> {
        NodeList {
            position: self.position,
            items: self.items.into_boxed_slice(),
        }
    }
}

pub type ClassList = NodeList<Class>;
pub type MemberList = NodeList<Member>;
pub type FormalList = NodeList<Formal>;
pub type StmtList = NodeList<Stmt>;
pub type ExprList = NodeList<Expr>;

/// Root of the tree: every class in the file, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub position: Position,
    pub classes: ClassList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub position: Position,
    pub filename: Rc<String>,
    pub name: String,
    /// `None` when the class has no `extends` clause.
    pub parent: Option<String>,
    pub members: MemberList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(Field),
    Method(Method),
}

impl Member {
    pub fn get_position(&self) -> &Position {
        match self {
            Member::Field(field) => &field.position,
            Member::Method(method) => &method.position,
        }
    }

    pub fn get_name(&self) -> &str {
        match self {
            Member::Field(field) => &field.name,
            Member::Method(method) => &method.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub position: Position,
    pub type_name: String,
    pub name: String,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub position: Position,
    pub return_type: String,
    pub name: String,
    pub formals: FormalList,
    pub body: StmtList,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Formal {
    pub position: Position,
    pub type_name: String,
    pub name: String,
}
