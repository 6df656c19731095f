//! Declaration rules: the program, classes and their members.

use crate::{
    ast::ast::{Class, Field, Formal, FormalList, ListBuilder, Member, Method, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::{scanner::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, parser::Parser, stmt::parse_block_stmt};

// <Program> ::= <Class> | <Class> <Program>
pub fn parse_program<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Program, Error> {
    let position = parser.get_position();
    let mut classes = ListBuilder::new(position.clone());

    while parser.current_token_kind() != TokenKind::EOF {
        classes.push(parse_class(parser)?);
    }

    Ok(Program {
        position,
        classes: classes.finish(),
    })
}

// <Class> ::= CLASS <Identifier> <ExtendsClause> { <MemberList> }
// <ExtendsClause> ::= EXTENDS <Identifier> | EMPTY
pub fn parse_class<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Class, Error> {
    let position = parser.expect(TokenKind::Class)?.span.start;
    let name = parser.expect_identifier()?;

    let parent = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        Some(parser.expect_identifier()?)
    } else {
        None
    };

    parser.expect_in(TokenKind::OpenCurly, "class declaration")?;

    let mut members = ListBuilder::new(parser.get_position());
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.error(ErrorImpl::MissingToken {
                construct: String::from("class declaration"),
                token: String::from("}"),
            }));
        }
        members.push(parse_member(parser)?);
    }
    parser.advance();

    Ok(Class {
        position,
        filename: parser.get_file(),
        name,
        parent,
        members: members.finish(),
    })
}

// <Member> ::= <Field> | <Method>
// <Method> ::= <Type> <Identifier> ( <Parameters> ) <BlockStmt>
// <Field> ::= <Type> <Identifier> <InitialValue> ;
// <InitialValue> ::= EMPTY | = <Expression>
pub fn parse_member<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Member, Error> {
    let position = parser.get_position();
    let type_name = parse_type(parser)?;
    let name = parser.expect_identifier()?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        let formals = parse_formals(parser)?;
        parser.expect_in(TokenKind::CloseParen, "method declaration")?;
        let body = parse_block_stmt(parser)?.body;

        return Ok(Member::Method(Method {
            position,
            return_type: type_name,
            name,
            formals,
            body,
        }));
    }

    let init = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect_in(TokenKind::Semicolon, "field declaration")?;

    Ok(Member::Field(Field {
        position,
        type_name,
        name,
        init,
    }))
}

// <Parameters> ::= EMPTY | <Formal> <MoreFormals>
// <MoreFormals> ::= EMPTY | , <Formal> <MoreFormals>
pub fn parse_formals<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<FormalList, Error> {
    let mut formals = ListBuilder::new(parser.get_position());

    if parser.current_token_kind() != TokenKind::CloseParen {
        formals.push(parse_formal(parser)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            formals.push(parse_formal(parser)?);
        }
    }

    Ok(formals.finish())
}

// <Formal> ::= <Type> <Identifier>
pub fn parse_formal<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Formal, Error> {
    let position = parser.get_position();
    let type_name = parse_type(parser)?;
    let name = parser.expect_identifier()?;

    Ok(Formal {
        position,
        type_name,
        name,
    })
}

// <Type> ::= <Identifier>
pub fn parse_type<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<String, Error> {
    parser.expect_identifier()
}
