use crate::error::ParseError;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::Value;

/// Parse program text into a single AST.
///
/// A program is either one atom, or one fully parenthesized form.
pub fn parse(content: &str) -> Result<Value, ParseError> {
    parse_program(&tokenize(content))
}

/// Parse an already tokenized program, rejecting trailing tokens.
pub fn parse_program(tokens: &[Token]) -> Result<Value, ParseError> {
    let (value, end) = parse_tokens(tokens, 0)?;
    if let Some(extra) = tokens.get(end) {
        return Err(ParseError::TooManyTokens {
            offset: extra.offset,
        });
    }
    Ok(value)
}

/// Parse one form starting at `start`, returning it with the index of the
/// first token after it.
pub fn parse_tokens(tokens: &[Token], start: usize) -> Result<(Value, usize), ParseError> {
    let token = tokens.get(start).ok_or_else(|| end_of_input(tokens))?;

    match token.kind {
        // A lone atom is a constant program, never a function name
        TokenKind::Atom if tokens.len() - start == 1 => {
            Ok((Value::from_atom(&token.text, true), start + 1))
        }
        TokenKind::Open => parse_form(tokens, start),
        _ => Err(ParseError::ExpectedOpeningParenthesis {
            offset: token.offset,
        }),
    }
}

/// Parse a parenthesized form; `tokens[start]` is its opening paren.
fn parse_form(tokens: &[Token], start: usize) -> Result<(Value, usize), ParseError> {
    let mut items = Vec::new();
    let mut position = start + 1;

    loop {
        let token = tokens.get(position).ok_or_else(|| end_of_input(tokens))?;

        match token.kind {
            TokenKind::Close => return Ok((Value::Expression(items), position + 1)),
            TokenKind::Open => {
                let (child, next) = parse_form(tokens, position)?;
                items.push(child);
                position = next;
            }
            TokenKind::Atom | TokenKind::Whitespace => {
                // The head keeps its text: it names the function
                let infer = !items.is_empty();
                items.push(Value::from_atom(&token.text, infer));
                position += 1;
            }
        }
    }
}

fn end_of_input(tokens: &[Token]) -> ParseError {
    ParseError::UnexpectedEndOfExpression {
        offset: tokens.last().map_or(0, Token::end),
    }
}
