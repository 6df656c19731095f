use crate::ast::{
    ast::{Class, Field, Method, Program},
    visitor::{walk_class, Accept, Visitor},
};

/// Looks for the program entry point: a `void main()` with no parameters
/// declared in a class named `Main`.
#[derive(Debug, Default)]
pub struct MainMethodFinder {
    has_main: bool,
}

impl MainMethodFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_main(mut self, program: &Program) -> bool {
        program.accept(&mut self);
        self.has_main
    }
}

impl Visitor for MainMethodFinder {
    type Output = ();

    fn visit_class(&mut self, node: &Class) {
        if node.name == "Main" {
            walk_class(self, node);
        }
    }

    fn visit_field(&mut self, _node: &Field) {}

    fn visit_method(&mut self, node: &Method) {
        if node.name == "main" && node.return_type == "void" && node.formals.is_empty() {
            self.has_main = true;
        }
    }
}
