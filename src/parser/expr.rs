//! Expression rules.
//!
//! Each precedence level is its own function that first parses the next
//! tighter level and then optionally combines, lowest binding first:
//!
//! 1. assignment (right associative, bare variable targets only)
//! 2. `||` and 3. `&&` (left associative)
//! 4. `==` `!=` and 5. `<` `>` `<=` `>=` (at most one operator per level)
//! 6. `+` `-` and 7. `*` `/` `%` (right operand parsed by recursion, so
//!    `a - b - c` groups as `a - (b - c)`)
//! 8. `new`, `cast` and prefix `-` `!` `++` `--`
//! 9. postfix `++` `--`
//! 10. primaries

use crate::{
    ast::{
        ast::{ExprList, ListBuilder},
        expressions::{
            AssignExpr, BinaryExpr, BinaryOp, CastExpr, ConstBooleanExpr, ConstIntExpr,
            ConstStringExpr, DispatchExpr, Expr, NewExpr, UnaryExpr, UnaryOp, VarExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{scanner::TokenSource, tokens::TokenKind},
    Position,
};

use super::parser::Parser;

fn binary(position: Position, operator: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        position,
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn unary(position: Position, operator: UnaryOp, operand: Expr, postfix: bool) -> Expr {
    Expr::Unary(UnaryExpr {
        position,
        operator,
        operand: Box::new(operand),
        postfix,
    })
}

// <Expression> ::= <LogicalORExpr> <OptionalAssignment>
// <OptionalAssignment> ::= EMPTY | = <Expression>
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let expr = parse_or_expr(parser)?;

    match expr {
        Expr::Var(target) if parser.current_token_kind() == TokenKind::Assignment => {
            parser.advance();
            let value = parse_expr(parser)?;

            Ok(Expr::Assign(AssignExpr {
                position,
                reference: target.reference_name().map(String::from),
                name: target.name,
                value: Box::new(value),
            }))
        }
        expr => Ok(expr),
    }
}

// <LogicalOR> ::= <LogicalAND> <LogicalORRest>
// <LogicalORRest> ::= EMPTY | || <LogicalAND> <LogicalORRest>
pub fn parse_or_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let mut left = parse_and_expr(parser)?;

    while parser.current_token_kind() == TokenKind::Or {
        parser.advance();
        let right = parse_and_expr(parser)?;
        left = binary(position.clone(), BinaryOp::Or, left, right);
    }

    Ok(left)
}

// <LogicalAND> ::= <ComparisonExpr> <LogicalANDRest>
// <LogicalANDRest> ::= EMPTY | && <ComparisonExpr> <LogicalANDRest>
pub fn parse_and_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let mut left = parse_equality_expr(parser)?;

    while parser.current_token_kind() == TokenKind::And {
        parser.advance();
        let right = parse_equality_expr(parser)?;
        left = binary(position.clone(), BinaryOp::And, left, right);
    }

    Ok(left)
}

// <ComparisonExpr> ::= <RelationalExpr> <EqualOrNotEqual> <RelationalExpr> | <RelationalExpr>
pub fn parse_equality_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let left = parse_relational_expr(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Equals => BinaryOp::Eq,
        TokenKind::NotEquals => BinaryOp::Ne,
        _ => return Ok(left),
    };
    parser.advance();

    let right = parse_relational_expr(parser)?;
    Ok(binary(position, operator, left, right))
}

// <RelationalExpr> ::= <AddExpr> | <AddExpr> <ComparisonOp> <AddExpr>
// <ComparisonOp> ::= < | > | <= | >=
pub fn parse_relational_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let left = parse_additive_expr(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Less => BinaryOp::Lt,
        TokenKind::Greater => BinaryOp::Gt,
        TokenKind::LessEquals => BinaryOp::Leq,
        TokenKind::GreaterEquals => BinaryOp::Geq,
        _ => return Ok(left),
    };
    parser.advance();

    let right = parse_additive_expr(parser)?;
    Ok(binary(position, operator, left, right))
}

// <AddExpr> ::= <MultExpr> | <MultExpr> + <AddExpr> | <MultExpr> - <AddExpr>
pub fn parse_additive_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let left = parse_multiplicative_expr(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Plus => BinaryOp::Plus,
        TokenKind::Dash => BinaryOp::Minus,
        _ => return Ok(left),
    };
    parser.advance();

    let right = parse_additive_expr(parser)?;
    Ok(binary(position, operator, left, right))
}

// <MultExpr> ::= <NewCastOrUnary> | <NewCastOrUnary> <MulOp> <MultExpr>
// <MulOp> ::= * | / | %
pub fn parse_multiplicative_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let left = parse_new_cast_or_unary(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Star => BinaryOp::Times,
        TokenKind::Slash => BinaryOp::Divide,
        TokenKind::Percent => BinaryOp::Modulus,
        _ => return Ok(left),
    };
    parser.advance();

    let right = parse_multiplicative_expr(parser)?;
    Ok(binary(position, operator, left, right))
}

// <NewCastOrUnary> ::= <NewExpression> | <CastExpression> | <UnaryPrefix>
pub fn parse_new_cast_or_unary<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::New => parse_new_expr(parser),
        TokenKind::Cast => parse_cast_expr(parser),
        _ => parse_unary_prefix(parser),
    }
}

// <NewExpression> ::= NEW <Identifier> ( )
pub fn parse_new_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.advance().span.start;
    let class_name = parser.expect_identifier()?;

    parser.expect_in(TokenKind::OpenParen, "new expression")?;
    parser.expect_in(TokenKind::CloseParen, "new expression")?;

    Ok(Expr::New(NewExpr {
        position,
        class_name,
    }))
}

// <CastExpression> ::= CAST ( <Type> , <Expression> )
pub fn parse_cast_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.advance().span.start;

    parser.expect_in(TokenKind::OpenParen, "cast expression")?;
    let target_type = parser.expect_identifier()?;
    parser.expect_in(TokenKind::Comma, "cast expression")?;
    let expression = parse_expr(parser)?;
    parser.expect_in(TokenKind::CloseParen, "cast expression")?;

    Ok(Expr::Cast(CastExpr {
        position,
        target_type,
        expression: Box::new(expression),
    }))
}

// <UnaryPrefix> ::= <PrefixOp> <UnaryPrefix> | <UnaryPostfix>
// <PrefixOp> ::= - | ! | ++ | --
pub fn parse_unary_prefix<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let operator = match parser.current_token_kind() {
        TokenKind::Dash => UnaryOp::Negate,
        TokenKind::Not => UnaryOp::Not,
        TokenKind::PlusPlus => UnaryOp::Increment,
        TokenKind::MinusMinus => UnaryOp::Decrement,
        _ => return parse_unary_postfix(parser),
    };

    let position = parser.advance().span.start;
    let operand = parse_unary_prefix(parser)?;

    Ok(unary(position, operator, operand, false))
}

// <UnaryPostfix> ::= <Primary> <PostfixOp>
// <PostfixOp> ::= ++ | -- | EMPTY
pub fn parse_unary_postfix<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let expr = parse_primary_expr(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::PlusPlus => UnaryOp::Increment,
        TokenKind::MinusMinus => UnaryOp::Decrement,
        _ => return Ok(expr),
    };
    parser.advance();

    Ok(unary(position, operator, expr, true))
}

// <Primary> ::= ( <Expression> ) | <IntegerConst> | <BooleanConst> |
//               <StringConst> | <VarExpr>
// <VarExpr> ::= <VarExprPrefix> <Identifier> <VarExprSuffix>
// <VarExprPrefix> ::= SUPER . | THIS . | EMPTY
// <VarExprSuffix> ::= ( <Arguments> ) | EMPTY
pub fn parse_primary_expr<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<Expr, Error> {
    let position = parser.get_position();

    match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect_in(TokenKind::CloseParen, "parenthesized expression")?;
            Ok(expr)
        }
        TokenKind::IntConst => {
            let value = match parser.current_token().value.parse() {
                Ok(value) => value,
                Err(_) => {
                    return Err(parser.error(ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    }))
                }
            };
            parser.advance();
            Ok(Expr::ConstInt(ConstIntExpr { position, value }))
        }
        TokenKind::BooleanConst => {
            let value = parser.advance().value == "true";
            Ok(Expr::ConstBoolean(ConstBooleanExpr { position, value }))
        }
        TokenKind::StrConst => {
            let value = parser.advance().value;
            Ok(Expr::ConstString(ConstStringExpr { position, value }))
        }
        TokenKind::This | TokenKind::Super => {
            let qualifier = parser.advance().value;
            parser.expect_error(
                TokenKind::Dot,
                ErrorImpl::ExpectedToken {
                    expected: format!("`.` after `{}`", qualifier),
                    found: parser.current_token().to_string(),
                },
            )?;

            let reference = Expr::Var(VarExpr {
                position: position.clone(),
                reference: None,
                name: qualifier,
            });
            parse_var_or_dispatch(parser, position, Some(reference))
        }
        TokenKind::Identifier => parse_var_or_dispatch(parser, position, None),
        _ => Err(parser.unexpected("expression")),
    }
}

fn parse_var_or_dispatch<S: TokenSource>(
    parser: &mut Parser<'_, S>,
    position: Position,
    reference: Option<Expr>,
) -> Result<Expr, Error> {
    let name = parser.expect_identifier()?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Var(VarExpr {
            position,
            reference: reference.map(Box::new),
            name,
        }));
    }

    parser.advance();
    let arguments = parse_arguments(parser)?;
    parser.expect_in(TokenKind::CloseParen, "argument list")?;

    Ok(Expr::Dispatch(DispatchExpr {
        position,
        receiver: reference.map(Box::new),
        method_name: name,
        arguments,
    }))
}

// <Arguments> ::= EMPTY | <Expression> <MoreArgs>
// <MoreArgs>  ::= EMPTY | , <Expression> <MoreArgs>
pub fn parse_arguments<S: TokenSource>(parser: &mut Parser<'_, S>) -> Result<ExprList, Error> {
    let mut arguments = ListBuilder::new(parser.get_position());

    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser)?);
        }
    }

    Ok(arguments.finish())
}
