//! Error types for reading icon markup

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Byte range the error points at
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);

                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::markup::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::markup::lexer::Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        // Format expected tokens nicely
        let mut expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                _ => None,
            })
            .collect();
        expected.sort();
        expected.dedup();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::markup::lexer::Token) -> String {
    use crate::markup::lexer::Token;
    match tok {
        Token::Name(s) => format!("name '{}'", s),
        Token::Str(s) => format!("string \"{}\"", s),
        Token::Lt => "'<'".to_string(),
        Token::LtSlash => "'</'".to_string(),
        Token::Gt(_) => "'>'".to_string(),
        Token::SlashGt(_) => "'/>'".to_string(),
        Token::Equals => "'='".to_string(),
        Token::Comment(_) => "comment".to_string(),
    }
}
