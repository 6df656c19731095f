//! Unit tests for the parser module.
//!
//! This module contains tests for parsing classes and members, every
//! statement form, the expression precedence chain and error reporting.

use std::rc::Rc;

use super::parser::{parse_source, Parser};
use crate::{
    ast::{
        ast::{Member, Program},
        expressions::Expr,
        statements::Stmt,
    },
    errors::errors::{CompilationError, ErrorHandler, ErrorImpl, ErrorKind},
    lexer::{
        lexer::tokenize,
        scanner::{Scanner, TokenSource},
        tokens::{Token, TokenKind},
    },
};

fn parse_ok(source: &str) -> Program {
    let mut handler = ErrorHandler::new();
    let result = parse_source(source, "test.btm", &mut handler);
    assert!(!handler.has_errors());
    result.unwrap()
}

fn parse_err(source: &str) -> CompilationError {
    let mut handler = ErrorHandler::new();
    let error = parse_source(source, "test.btm", &mut handler).unwrap_err();
    assert_eq!(handler.list().len(), 1);
    assert_eq!(error.get_errors(), handler.list());
    error
}

fn first_message(error: &CompilationError) -> String {
    error.get_errors()[0].get_message()
}

/// Parses `expr` as a field initializer and renders it as an s-expression.
fn expr(source: &str) -> String {
    let program = parse_ok(&format!("class A {{ int x = {}; }}", source));
    match &program.classes[0].members[0] {
        Member::Field(field) => sexpr(field.init.as_ref().unwrap()),
        other => panic!("expected field, found {:?}", other),
    }
}

/// Parses `body` as the statements of a method and returns them.
fn stmts(body: &str) -> Vec<Stmt> {
    let program = parse_ok(&format!("class A {{ void m() {{ {} }} }}", body));
    match &program.classes[0].members[0] {
        Member::Method(method) => method.body.to_vec(),
        other => panic!("expected method, found {:?}", other),
    }
}

fn sexpr(expr: &Expr) -> String {
    match expr {
        Expr::ConstInt(e) => e.value.to_string(),
        Expr::ConstBoolean(e) => e.value.to_string(),
        Expr::ConstString(e) => format!("{:?}", e.value),
        Expr::Var(e) => match &e.reference {
            Some(reference) => format!("{}.{}", sexpr(reference), e.name),
            None => e.name.clone(),
        },
        Expr::Assign(e) => match &e.reference {
            Some(reference) => format!("(= {}.{} {})", reference, e.name, sexpr(&e.value)),
            None => format!("(= {} {})", e.name, sexpr(&e.value)),
        },
        Expr::Dispatch(e) => {
            let mut out = String::from("(call ");
            if let Some(receiver) = &e.receiver {
                out.push_str(&sexpr(receiver));
                out.push('.');
            }
            out.push_str(&e.method_name);
            for argument in e.arguments.iter() {
                out.push(' ');
                out.push_str(&sexpr(argument));
            }
            out.push(')');
            out
        }
        Expr::New(e) => format!("(new {})", e.class_name),
        Expr::Cast(e) => format!("(cast {} {})", e.target_type, sexpr(&e.expression)),
        Expr::Binary(e) => format!("({} {} {})", e.operator, sexpr(&e.left), sexpr(&e.right)),
        Expr::Unary(e) if e.postfix => format!("(post{} {})", e.operator, sexpr(&e.operand)),
        Expr::Unary(e) => format!("({} {})", e.operator, sexpr(&e.operand)),
    }
}

// DECLARATIONS

#[test]
fn test_parse_empty_class() {
    let program = parse_ok("class Empty { }");

    assert_eq!(program.classes.len(), 1);
    let class = &program.classes[0];
    assert_eq!(class.name, "Empty");
    assert_eq!(class.parent, None);
    assert!(class.members.is_empty());
    assert_eq!(class.filename.as_str(), "test.btm");
}

#[test]
fn test_parse_main_method() {
    let program = parse_ok("class Main { void main() { return; } }");

    let method = match &program.classes[0].members[0] {
        Member::Method(method) => method,
        other => panic!("expected method, found {:?}", other),
    };
    assert_eq!(method.name, "main");
    assert_eq!(method.return_type, "void");
    assert!(method.formals.is_empty());
    assert_eq!(method.body.len(), 1);
    assert!(matches!(&method.body[0], Stmt::Return(ret) if ret.value.is_none()));
}

#[test]
fn test_parse_classes_in_source_order() {
    let program = parse_ok("class A { } class B extends A { } class C extends B { }");

    let names: Vec<&str> = program.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(program.classes[1].parent.as_deref(), Some("A"));
    assert_eq!(program.classes[2].parent.as_deref(), Some("B"));
}

#[test]
fn test_parse_empty_program() {
    let program = parse_ok("  // nothing here\n");
    assert!(program.classes.is_empty());
}

#[test]
fn test_parse_fields() {
    let program = parse_ok("class A { int x; String s = \"hi\"; boolean b = true; }");
    let members = &program.classes[0].members;

    assert_eq!(members.len(), 3);
    match &members[0] {
        Member::Field(field) => {
            assert_eq!(field.type_name, "int");
            assert_eq!(field.name, "x");
            assert!(field.init.is_none());
        }
        other => panic!("expected field, found {:?}", other),
    }
    match &members[1] {
        Member::Field(field) => assert_eq!(sexpr(field.init.as_ref().unwrap()), "\"hi\""),
        other => panic!("expected field, found {:?}", other),
    }
    assert_eq!(members[2].get_name(), "b");
}

#[test]
fn test_parse_method_formals() {
    let program = parse_ok("class A { int add(int a, int b) { return a + b; } }");

    let method = match &program.classes[0].members[0] {
        Member::Method(method) => method,
        other => panic!("expected method, found {:?}", other),
    };
    let formals: Vec<(&str, &str)> = method
        .formals
        .iter()
        .map(|f| (f.type_name.as_str(), f.name.as_str()))
        .collect();
    assert_eq!(formals, vec![("int", "a"), ("int", "b")]);
}

#[test]
fn test_node_positions() {
    let source = "class A {\n  int m() { return 1 + 2; }\n}";
    let program = parse_ok(source);

    assert_eq!(program.position.0, 0);
    assert_eq!(program.classes[0].position.0, 0);

    let method = match &program.classes[0].members[0] {
        Member::Method(method) => method,
        other => panic!("expected method, found {:?}", other),
    };
    assert_eq!(method.position.0, 12);

    match &method.body[0] {
        Stmt::Return(ret) => {
            assert_eq!(ret.position.0, 22);
            assert_eq!(ret.value.as_ref().unwrap().get_position().0, 29);
        }
        other => panic!("expected return, found {:?}", other),
    }
}

// STATEMENTS

#[test]
fn test_parse_empty_for() {
    let body = stmts("for ( ; ; ) ;");

    match &body[0] {
        Stmt::For(stmt) => {
            assert!(stmt.start.is_none());
            assert!(stmt.terminate.is_none());
            assert!(stmt.increment.is_none());
            assert!(matches!(&*stmt.body, Stmt::Block(block) if block.body.is_empty()));
        }
        other => panic!("expected for, found {:?}", other),
    }
}

#[test]
fn test_parse_full_for() {
    let body = stmts("for (i = 0; i < 10; i++) { x = x + i; }");

    match &body[0] {
        Stmt::For(stmt) => {
            assert_eq!(sexpr(stmt.start.as_ref().unwrap()), "(= i 0)");
            assert_eq!(sexpr(stmt.terminate.as_ref().unwrap()), "(< i 10)");
            assert_eq!(sexpr(stmt.increment.as_ref().unwrap()), "(post++ i)");
            assert!(matches!(&*stmt.body, Stmt::Block(block) if block.body.len() == 1));
        }
        other => panic!("expected for, found {:?}", other),
    }
}

#[test]
fn test_parse_for_with_some_clauses() {
    let body = stmts("for (; i < 3;) i++;");

    match &body[0] {
        Stmt::For(stmt) => {
            assert!(stmt.start.is_none());
            assert!(stmt.terminate.is_some());
            assert!(stmt.increment.is_none());
            assert!(matches!(&*stmt.body, Stmt::Expr(_)));
        }
        other => panic!("expected for, found {:?}", other),
    }
}

#[test]
fn test_parse_if_else() {
    let body = stmts("if (a < b) return a; else return b; if (c) { }");

    match &body[0] {
        Stmt::If(stmt) => {
            assert_eq!(sexpr(&stmt.predicate), "(< a b)");
            assert!(matches!(&*stmt.then_stmt, Stmt::Return(_)));
            assert!(matches!(stmt.else_stmt.as_deref(), Some(Stmt::Return(_))));
        }
        other => panic!("expected if, found {:?}", other),
    }
    match &body[1] {
        Stmt::If(stmt) => assert!(stmt.else_stmt.is_none()),
        other => panic!("expected if, found {:?}", other),
    }
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let body = stmts("if (a) if (b) x = 1; else x = 2;");

    match &body[0] {
        Stmt::If(outer) => {
            assert!(outer.else_stmt.is_none());
            assert!(matches!(&*outer.then_stmt, Stmt::If(inner) if inner.else_stmt.is_some()));
        }
        other => panic!("expected if, found {:?}", other),
    }
}

#[test]
fn test_parse_while_and_break() {
    let body = stmts("while (true) { break; }");

    match &body[0] {
        Stmt::While(stmt) => {
            assert_eq!(sexpr(&stmt.predicate), "true");
            match &*stmt.body {
                Stmt::Block(block) => assert!(matches!(&block.body[0], Stmt::Break(_))),
                other => panic!("expected block, found {:?}", other),
            }
        }
        other => panic!("expected while, found {:?}", other),
    }
}

#[test]
fn test_parse_var_declaration() {
    let body = stmts("var total = 1 + 2;");

    match &body[0] {
        Stmt::Decl(stmt) => {
            assert_eq!(stmt.name, "total");
            assert_eq!(sexpr(&stmt.init), "(+ 1 2)");
        }
        other => panic!("expected declaration, found {:?}", other),
    }
}

#[test]
fn test_parse_nested_blocks() {
    let body = stmts("{ { } ; x++; }");

    match &body[0] {
        Stmt::Block(block) => {
            assert_eq!(block.body.len(), 3);
            assert!(matches!(&block.body[1], Stmt::Block(empty) if empty.body.is_empty()));
        }
        other => panic!("expected block, found {:?}", other),
    }
}

#[test]
fn test_parse_return_with_value() {
    let body = stmts("return this.size;");
    assert!(matches!(&body[0], Stmt::Return(ret) if sexpr(ret.value.as_ref().unwrap()) == "this.size"));
}

// EXPRESSIONS

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(expr("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(expr("1 * 2 + 3"), "(+ (* 1 2) 3)");
}

#[test]
fn test_additive_chain_groups_right() {
    assert_eq!(expr("a - b - c"), "(- a (- b c))");
    assert_eq!(expr("a + b - c + d"), "(+ a (- b (+ c d)))");
}

#[test]
fn test_multiplicative_chain_groups_right() {
    assert_eq!(expr("a / b * c"), "(/ a (* b c))");
    assert_eq!(expr("a % b / c"), "(% a (/ b c))");
}

#[test]
fn test_logical_operators_group_left() {
    assert_eq!(expr("a || b || c"), "(|| (|| a b) c)");
    assert_eq!(expr("a && b && c"), "(&& (&& a b) c)");
    assert_eq!(expr("a && b || c && d"), "(|| (&& a b) (&& c d))");
}

#[test]
fn test_comparison_precedence() {
    assert_eq!(expr("a < b == c >= d"), "(== (< a b) (>= c d))");
    assert_eq!(expr("a + 1 <= b * 2"), "(<= (+ a 1) (* b 2))");
    assert_eq!(expr("a != b && c > d"), "(&& (!= a b) (> c d))");
}

#[test]
fn test_equality_does_not_chain() {
    let error = parse_err("class A { boolean x = a == b == c; }");
    assert!(first_message(&error).contains("missing `;`"));
}

#[test]
fn test_relational_does_not_chain() {
    let error = parse_err("class A { boolean x = a < b < c; }");
    assert!(first_message(&error).contains("missing `;`"));
}

#[test]
fn test_parenthesized_expression() {
    assert_eq!(expr("(a - b) - c"), "(- (- a b) c)");
    assert_eq!(expr("(1 + 2) * 3"), "(* (+ 1 2) 3)");
}

#[test]
fn test_unary_operators() {
    assert_eq!(expr("-x"), "(- x)");
    assert_eq!(expr("!!done"), "(! (! done))");
    assert_eq!(expr("-!x"), "(- (! x))");
    assert_eq!(expr("++x"), "(++ x)");
    assert_eq!(expr("--x"), "(-- x)");
    assert_eq!(expr("x++"), "(post++ x)");
    assert_eq!(expr("x--"), "(post-- x)");
    assert_eq!(expr("-x * y"), "(* (- x) y)");
}

#[test]
fn test_prefix_and_postfix_are_discriminated() {
    let program = parse_ok("class A { int x = ++a; int y = a++; }");
    let members = &program.classes[0].members;

    for (member, postfix) in members.iter().zip([false, true]) {
        match member {
            Member::Field(field) => match field.init.as_ref().unwrap() {
                Expr::Unary(unary) => assert_eq!(unary.postfix, postfix),
                other => panic!("expected unary, found {:?}", other),
            },
            other => panic!("expected field, found {:?}", other),
        }
    }
}

#[test]
fn test_constants() {
    assert_eq!(expr("42"), "42");
    assert_eq!(expr("false"), "false");
    assert_eq!(expr("\"a\\nb\""), "\"a\\nb\"");
    assert_eq!(expr("2147483647"), "2147483647");
}

#[test]
fn test_new_and_cast() {
    assert_eq!(expr("new Foo()"), "(new Foo)");
    assert_eq!(expr("cast(Object, a + b)"), "(cast Object (+ a b))");
    assert_eq!(expr("new Foo() * 2"), "(* (new Foo) 2)");
}

#[test]
fn test_dispatch_expressions() {
    assert_eq!(expr("f()"), "(call f)");
    assert_eq!(expr("f(1, g(2), a + b)"), "(call f 1 (call g 2) (+ a b))");
    assert_eq!(expr("this.size()"), "(call this.size)");
    assert_eq!(expr("super.init(x)"), "(call super.init x)");
}

#[test]
fn test_qualified_variables() {
    assert_eq!(expr("this.x + super.y"), "(+ this.x super.y)");
}

#[test]
fn test_assignment() {
    let body = stmts("a = b = 1; this.count = count + 1;");

    match &body[0] {
        Stmt::Expr(stmt) => assert_eq!(sexpr(&stmt.expression), "(= a (= b 1))"),
        other => panic!("expected expression statement, found {:?}", other),
    }
    match &body[1] {
        Stmt::Expr(stmt) => assert_eq!(sexpr(&stmt.expression), "(= this.count (+ count 1))"),
        other => panic!("expected expression statement, found {:?}", other),
    }
}

#[test]
fn test_assignment_binds_loosest() {
    let body = stmts("x = a || b && c;");

    match &body[0] {
        Stmt::Expr(stmt) => assert_eq!(sexpr(&stmt.expression), "(= x (|| a (&& b c)))"),
        other => panic!("expected expression statement, found {:?}", other),
    }
}

#[test]
fn test_assignment_requires_variable_target() {
    let error = parse_err("class A { void m() { f() = 1; } }");
    assert!(first_message(&error).contains("expression statement - missing `;`"));

    let error = parse_err("class A { void m() { (a + b) = 1; } }");
    assert!(first_message(&error).contains("missing `;`"));
}

// ERRORS

#[test]
fn test_missing_field_terminator() {
    let error = parse_err("class A { int x = 5 }");
    let diagnostic = &error.get_errors()[0];

    assert_eq!(diagnostic.get_kind(), ErrorKind::ParseError);
    assert_eq!(diagnostic.get_message(), "invalid field declaration - missing `;`");
    assert_eq!(diagnostic.get_position().0, 20);
}

#[test]
fn test_missing_class_keyword() {
    let error = parse_err("int x;");
    assert_eq!(first_message(&error), "expected class, found `int`");
}

#[test]
fn test_missing_class_body() {
    let error = parse_err("class A extends B ;");
    assert_eq!(first_message(&error), "invalid class declaration - missing `{`");
}

#[test]
fn test_missing_class_name() {
    let error = parse_err("class { }");
    assert_eq!(first_message(&error), "expected identifier, found `{`");
}

#[test]
fn test_unclosed_class() {
    let error = parse_err("class A { int x;");
    assert_eq!(first_message(&error), "invalid class declaration - missing `}`");
}

#[test]
fn test_unclosed_block() {
    let error = parse_err("class A { void m() { return; ");
    assert_eq!(first_message(&error), "invalid block statement - missing `}`");
}

#[test]
fn test_var_requires_initializer() {
    let error = parse_err("class A { void m() { var x; } }");
    assert_eq!(first_message(&error), "invalid var declaration - missing `=`");
}

#[test]
fn test_statement_errors() {
    let cases = [
        ("while x) { }", "invalid while statement - missing `(`"),
        ("if (x { }", "invalid if statement - missing `)`"),
        ("for (;; i++ { }", "invalid for statement - missing `)`"),
        ("for (i = 0, i < 3;) ;", "invalid for statement - missing `;`"),
        ("break", "invalid break statement - missing `;`"),
        ("return 1 }", "invalid return statement - missing `;`"),
    ];

    for (body, message) in cases {
        let error = parse_err(&format!("class A {{ void m() {{ {} }} }}", body));
        assert_eq!(first_message(&error), message, "for body `{}`", body);
    }
}

#[test]
fn test_expression_errors() {
    let cases = [
        ("new Foo(1)", "invalid new expression - missing `)`"),
        ("new Foo", "invalid new expression - missing `(`"),
        ("cast(int x)", "invalid cast expression - missing `,`"),
        ("(a + b", "invalid parenthesized expression - missing `)`"),
        ("f(a, b", "invalid argument list - missing `)`"),
        ("this", "expected `.` after `this`, found `;`"),
        ("super.", "expected identifier, found `;`"),
        ("+ 1", "expected expression, found `+`"),
    ];

    for (source, message) in cases {
        let error = parse_err(&format!("class A {{ int x = {}; }}", source));
        assert_eq!(first_message(&error), message, "for expression `{}`", source);
    }
}

#[test]
fn test_integer_overflow() {
    let error = parse_err("class A { int x = 2147483648; }");
    let diagnostic = &error.get_errors()[0];

    assert_eq!(diagnostic.get_kind(), ErrorKind::ParseError);
    assert!(matches!(
        diagnostic.get_internal_error(),
        ErrorImpl::NumberParseError { token } if token == "2147483648"
    ));
}

#[test]
fn test_lex_error_aborts_parse() {
    let error = parse_err("class A { int x = 1 @ 2; }");
    let diagnostic = &error.get_errors()[0];

    assert_eq!(diagnostic.get_kind(), ErrorKind::LexError);
    assert_eq!(diagnostic.get_position().0, 20);
}

#[test]
fn test_unterminated_comment_aborts_parse() {
    let error = parse_err("class A { int x; /* trailing");
    let diagnostic = &error.get_errors()[0];

    assert_eq!(diagnostic.get_kind(), ErrorKind::LexError);
    assert_eq!(diagnostic.get_message(), "unterminated block comment");
    assert_eq!(diagnostic.get_position().0, 17);
}

#[test]
fn test_only_first_error_is_reported() {
    let error = parse_err("class A { int x = 5 } class { } class B ;");
    assert_eq!(error.get_errors().len(), 1);
}

#[test]
fn test_handler_cleared_between_parses() {
    let mut handler = ErrorHandler::new();

    assert!(parse_source("class A { int x = 5 }", "first.btm", &mut handler).is_err());
    assert_eq!(handler.list().len(), 1);
    handler.clear();

    let error = parse_source("class B { void m() { break } }", "second.btm", &mut handler).unwrap_err();
    assert_eq!(error.get_errors().len(), 1);
    assert_eq!(error.get_errors()[0].get_position().get_file(), "second.btm");

    handler.clear();
    assert!(parse_source("class C { }", "third.btm", &mut handler).is_ok());
    assert!(!handler.has_errors());
}

#[test]
fn test_handler_accumulates_without_clear() {
    let mut handler = ErrorHandler::new();

    let _ = parse_source("class A { int x = 5 }", "first.btm", &mut handler);
    let error = parse_source("class B {", "second.btm", &mut handler).unwrap_err();

    assert_eq!(error.get_errors().len(), 2);
    assert_eq!(error.get_errors()[0].get_position().get_file(), "first.btm");
}

struct VecSource {
    tokens: Vec<Token>,
}

impl TokenSource for VecSource {
    fn next(&mut self) -> Token {
        if self.tokens.len() > 1 {
            self.tokens.remove(0)
        } else {
            self.tokens[0].clone()
        }
    }
}

#[test]
fn test_parser_accepts_any_token_source() {
    let file = Rc::new("tokens".to_string());
    let tokens = tokenize("class A { }", Rc::clone(&file)).unwrap();
    let mut handler = ErrorHandler::new();

    let program = Parser::new(VecSource { tokens }, file, &mut handler)
        .parse()
        .unwrap();

    assert_eq!(program.classes[0].name, "A");
}

#[test]
fn test_parser_primes_one_lookahead() {
    let file = Rc::new("tokens".to_string());
    let tokens = tokenize("class A { }", Rc::clone(&file)).unwrap();
    let mut handler = ErrorHandler::new();

    let parser = Parser::new(VecSource { tokens }, file, &mut handler);
    assert_eq!(parser.current_token_kind(), TokenKind::Class);
}

#[test]
fn test_scanner_without_eof_token() {
    let file = Rc::new("tokens".to_string());
    let mut tokens = tokenize("class A { }", Rc::clone(&file)).unwrap();
    tokens.pop();
    let mut handler = ErrorHandler::new();

    let scanner = Scanner::from_tokens(tokens, Rc::clone(&file));
    assert!(Parser::new(scanner, file, &mut handler).parse().is_ok());
}
