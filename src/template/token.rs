use nom::{
    bytes::complete::take_while1,
    character::complete::multispace0,
    combinator::map,
    multi::many0,
    sequence::preceded,
    IResult,
};

/// Raw lexical token of the template surface: tokens are whitespace
/// separated, so only the standalone tokens `(` and `)` delimit groups.
/// A parenthesis glued to other characters is an ordinary symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    Open,
    Close,
    Symbol(String),
}

/// One element of a tokenized template: a scalar symbol (label spec,
/// decoration suffixes still attached, or the `$` arity marker) or a nested
/// child group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    Symbol(String),
    Group(TokenGroup),
}

pub type TokenGroup = Vec<TemplateToken>;

fn symbol(input: &str) -> IResult<&str, RawToken> {
    map(take_while1(|c: char| !c.is_whitespace()), |s: &str| match s {
        "(" => RawToken::Open,
        ")" => RawToken::Close,
        _ => RawToken::Symbol(s.to_string()),
    })(input)
}

/// Splits a template string into raw tokens. Cannot fail: any non-space
/// character sequence is some token.
pub fn lex(input: &str) -> Vec<RawToken> {
    let result: IResult<&str, Vec<RawToken>> = many0(preceded(multispace0, symbol))(input);
    match result {
        Ok((_, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_classifies_parens() {
        let tokens = lex("( S ( NP ) )");
        assert_eq!(
            tokens,
            vec![
                RawToken::Open,
                RawToken::Symbol("S".to_string()),
                RawToken::Open,
                RawToken::Symbol("NP".to_string()),
                RawToken::Close,
                RawToken::Close,
            ]
        );
    }

    #[test]
    fn test_lex_keeps_decorations_attached() {
        let tokens = lex("( PRP$:subject-raw-lower=my )");
        assert_eq!(
            tokens,
            vec![
                RawToken::Open,
                RawToken::Symbol("PRP$:subject-raw-lower=my".to_string()),
                RawToken::Close,
            ]
        );
    }

    #[test]
    fn test_lex_glued_paren_is_a_symbol() {
        let tokens = lex("(S");
        assert_eq!(tokens, vec![RawToken::Symbol("(S".to_string())]);
    }

    #[test]
    fn test_lex_empty() {
        assert!(lex("").is_empty());
        assert!(lex("   ").is_empty());
    }
}
