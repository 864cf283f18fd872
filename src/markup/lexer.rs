//! Lexer for SVG element markup using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Tag delimiters (order matters - longer patterns first)
    #[token("</")]
    LtSlash,
    #[token("<")]
    Lt,

    // Tag ends carry the text that follows them up to the next '<',
    // untrimmed so text split by a comment can be joined back together
    #[regex(r"/>[^<]*", |lex| unescape(&lex.slice()[2..]))]
    SlashGt(String),
    #[regex(r">[^<]*", |lex| unescape(&lex.slice()[1..]))]
    Gt(String),

    #[token("=")]
    Equals,

    // Element and attribute names (`stroke-width`, `xlink:href`)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_:.\-]*", |lex| lex.slice().to_string())]
    Name(String),

    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        unescape(&s[1..s.len()-1])
    })]
    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        unescape(&s[1..s.len()-1])
    })]
    Str(String),

    // Comments carry the text that follows them, like tag ends
    #[regex(r"<!--([^-]|-[^-])*-->[^<]*", |lex| {
        let s = lex.slice();
        let end = s.find("-->").map(|i| i + 3).unwrap_or(s.len());
        unescape(&s[end..])
    })]
    Comment(String),
}

/// Decode the predefined XML entities and numeric character references
///
/// Anything that isn't a well-formed reference is kept as written.
pub(crate) fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode the body of a `&...;` reference
fn decode_reference(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => {
            let (digits, radix) = match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                Some(hex) => (hex, 16),
                None => (name.strip_prefix('#')?, 10),
            };
            // from_str_radix would also take a leading '+'
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            char::from_u32(u32::from_str_radix(digits, radix).ok()?)
        }
    }
}

/// Lex input into tokens with spans
///
/// Spans of input that could not be lexed are returned separately so the
/// parser can report them instead of silently dropping characters.
pub fn lex(input: &str) -> (Vec<(Token, Span)>, Vec<Span>) {
    let mut tokens = Vec::new();
    let mut invalid = Vec::new();
    for (tok, span) in Token::lexer(input).spanned() {
        match tok {
            Ok(t) => tokens.push((t, span)),
            Err(()) => invalid.push(span),
        }
    }
    (tokens, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let (tokens, invalid) = lex(input);
        assert!(invalid.is_empty(), "unexpected lex errors: {:?}", invalid);
        tokens.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_self_closing_element() {
        assert_eq!(
            tokens(r#"<circle r="2"/>"#),
            vec![
                Token::Lt,
                Token::Name("circle".to_string()),
                Token::Name("r".to_string()),
                Token::Equals,
                Token::Str("2".to_string()),
                Token::SlashGt(String::new()),
            ]
        );
    }

    #[test]
    fn test_text_content_attached_to_tag_end() {
        assert_eq!(
            tokens("<title> Home </title>"),
            vec![
                Token::Lt,
                Token::Name("title".to_string()),
                Token::Gt(" Home ".to_string()),
                Token::LtSlash,
                Token::Name("title".to_string()),
                Token::Gt(String::new()),
            ]
        );
    }

    #[test]
    fn test_single_quotes_and_entities() {
        assert_eq!(
            tokens("d='a &amp; b'"),
            vec![
                Token::Name("d".to_string()),
                Token::Equals,
                Token::Str("a & b".to_string()),
            ]
        );
    }

    #[test]
    fn test_hyphenated_and_namespaced_names() {
        assert_eq!(
            tokens("stroke-width xlink:href"),
            vec![
                Token::Name("stroke-width".to_string()),
                Token::Name("xlink:href".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_carries_following_text() {
        assert_eq!(
            tokens("<!-- outline -->tail<g/>"),
            vec![
                Token::Comment("tail".to_string()),
                Token::Lt,
                Token::Name("g".to_string()),
                Token::SlashGt(String::new()),
            ]
        );
    }

    #[test]
    fn test_numeric_character_references() {
        assert_eq!(unescape("&#169; 2024"), "\u{a9} 2024");
        assert_eq!(unescape("a&#x2014;b"), "a\u{2014}b");
        assert_eq!(unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_malformed_references_kept() {
        assert_eq!(unescape("fish & chips"), "fish & chips");
        assert_eq!(unescape("&bogus; &#xZZ; &#;"), "&bogus; &#xZZ; &#;");
        assert_eq!(unescape("&#x110000;"), "&#x110000;");
        assert_eq!(unescape("&#+65;"), "&#+65;");
    }

    #[test]
    fn test_invalid_characters_reported() {
        let (_, invalid) = lex("<g @/>");
        assert_eq!(invalid, vec![3..4]);
    }
}
