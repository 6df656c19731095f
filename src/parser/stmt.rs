use crate::{
    ast::{
        ast::ListBuilder,
        expressions::Expr,
        statements::{
            BlockStmt, BreakStmt, DeclStmt, ExprStmt, ForStmt, IfStmt, ReturnStmt, Stmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{scanner::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

// <Stmt> ::= <WhileStmt> | <ReturnStmt> | <BreakStmt> | <VarDeclaration>
//          | <ExpressionStmt> | <ForStmt> | <BlockStmt> | <IfStmt> | ;
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::OpenCurly => Ok(Stmt::Block(parse_block_stmt(parser)?)),
        TokenKind::Var => parse_var_decl_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::For => parse_for_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Break => parse_break_stmt(parser),
        TokenKind::Semicolon => parse_empty_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

// <WhileStmt> ::= WHILE ( <Expression> ) <Stmt>
pub fn parse_while_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    parser.expect_in(TokenKind::OpenParen, "while statement")?;
    let predicate = parse_expr(parser)?;
    parser.expect_in(TokenKind::CloseParen, "while statement")?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        position,
        predicate,
        body: Box::new(body),
    }))
}

// <ReturnStmt> ::= RETURN <Expression> ; | RETURN ;
pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect_in(TokenKind::Semicolon, "return statement")?;

    Ok(Stmt::Return(ReturnStmt { position, value }))
}

// <BreakStmt> ::= BREAK ;
pub fn parse_break_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;
    parser.expect_in(TokenKind::Semicolon, "break statement")?;

    Ok(Stmt::Break(BreakStmt { position }))
}

// <ExpressionStmt> ::= <Expression> ;
pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.get_position();
    let expression = parse_expr(parser)?;
    parser.expect_in(TokenKind::Semicolon, "expression statement")?;

    Ok(Stmt::Expr(ExprStmt {
        position,
        expression,
    }))
}

// A lone `;` is an empty block
pub fn parse_empty_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    Ok(Stmt::Block(BlockStmt {
        position: position.clone(),
        body: ListBuilder::new(position).finish(),
    }))
}

// <VarDeclaration> ::= VAR <Id> = <Expression> ;
pub fn parse_var_decl_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;
    let name = parser.expect_identifier()?;

    // Every local variable must be initialized
    parser.expect_in(TokenKind::Assignment, "var declaration")?;
    let init = parse_expr(parser)?;
    parser.expect_in(TokenKind::Semicolon, "var declaration")?;

    Ok(Stmt::Decl(DeclStmt {
        position,
        name,
        init,
    }))
}

// <ForStmt> ::= FOR ( <Start> ; <Terminate> ; <Increment> ) <Stmt>
// <Start> ::=     EMPTY | <Expression>
// <Terminate> ::= EMPTY | <Expression>
// <Increment> ::= EMPTY | <Expression>
pub fn parse_for_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    parser.expect_in(TokenKind::OpenParen, "for statement")?;

    let start = parse_optional_expr(parser, TokenKind::Semicolon)?;
    parser.expect_in(TokenKind::Semicolon, "for statement")?;

    let terminate = parse_optional_expr(parser, TokenKind::Semicolon)?;
    parser.expect_in(TokenKind::Semicolon, "for statement")?;

    let increment = parse_optional_expr(parser, TokenKind::CloseParen)?;
    parser.expect_in(TokenKind::CloseParen, "for statement")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        position,
        start,
        terminate,
        increment,
        body: Box::new(body),
    }))
}

fn parse_optional_expr<S: TokenSource>(
    parser: &mut Parser<'_, S>,
    terminator: TokenKind,
) -> Result<Option<Expr>, Error> {
    if parser.current_token_kind() == terminator {
        return Ok(None);
    }

    Ok(Some(parse_expr(parser)?))
}

// <BlockStmt> ::= { <Body> }
// <Body> ::= EMPTY | <Stmt> <Body>
pub fn parse_block_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<BlockStmt, Error> {
    let position = parser.expect_in(TokenKind::OpenCurly, "block statement")?.span.start;

    let mut statements = ListBuilder::new(position.clone());
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.error(ErrorImpl::MissingToken {
                construct: String::from("block statement"),
                token: String::from("}"),
            }));
        }
        statements.push(parse_stmt(parser)?);
    }
    parser.advance();

    Ok(BlockStmt {
        position,
        body: statements.finish(),
    })
}

// <IfStmt> ::= IF ( <Expr> ) <Stmt> | IF ( <Expr> ) <Stmt> ELSE <Stmt>
pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    parser.expect_in(TokenKind::OpenParen, "if statement")?;
    let predicate = parse_expr(parser)?;
    parser.expect_in(TokenKind::CloseParen, "if statement")?;

    let then_stmt = parse_stmt(parser)?;

    let else_stmt = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        position,
        predicate,
        then_stmt: Box::new(then_stmt),
        else_stmt,
    }))
}
