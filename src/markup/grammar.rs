//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::icon::{AttrValue, Attribute, Node, ShapeDescriptor, Tag};
use crate::markup::lexer::Token;

/// A parsed element together with the text that follows its closing tag
type Element = (ShapeDescriptor, String);

/// Parse SVG element markup into shape descriptors
pub fn parse(input: &str) -> Result<Vec<ShapeDescriptor>, Vec<ParseError>> {
    let len = input.len();

    let (tokens, invalid) = crate::markup::lexer::lex(input);
    if !invalid.is_empty() {
        return Err(invalid
            .into_iter()
            .map(|span| ParseError::Syntax {
                message: format!("Unexpected character '{}'", &input[span.clone()]),
                span,
                expected: vec![],
            })
            .collect());
    }

    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    fragment_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Join a tag end's text with the text after any comments that follow it
fn join_text((first, rest): (String, Vec<String>)) -> String {
    let mut text = first;
    for part in rest {
        text.push_str(&part);
    }
    text.trim().to_string()
}

fn build_shape(name: &str, attributes: Vec<Attribute>, children: Vec<Node>) -> ShapeDescriptor {
    ShapeDescriptor {
        tag: Tag::from_name(name),
        attributes,
        children,
    }
}

fn fragment_parser<'a, I>(
) -> impl Parser<'a, I, Vec<ShapeDescriptor>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Name(s) => s,
    };

    let string = select! {
        Token::Str(s) => s,
    };

    // Text split by comments is joined back into one run
    let comments = select! {
        Token::Comment(text) => text,
    }
    .repeated()
    .collect::<Vec<String>>();

    let tag_end = select! {
        Token::Gt(text) => text,
    }
    .then(comments.clone())
    .map(join_text);

    let self_close = select! {
        Token::SlashGt(text) => text,
    }
    .then(comments.clone())
    .map(join_text);

    // Comments before the first element may only be followed by whitespace
    let prologue = comments.try_map(|texts, span| {
        let text = texts.concat();
        if text.trim().is_empty() {
            Ok(())
        } else {
            Err(Rich::custom(
                span,
                format!("Text outside of an element: \"{}\"", text.trim()),
            ))
        }
    });

    // name="value"
    let attribute = name
        .clone()
        .then_ignore(just(Token::Equals))
        .then(string)
        .map(|(name, value)| Attribute::new(&name, AttrValue::Str(value)));

    let element = recursive(|element| {
        // <name attr="..." ...
        let open = just(Token::Lt)
            .ignore_then(name.clone())
            .then(attribute.clone().repeated().collect::<Vec<_>>());

        // <name ... />
        let empty_element = open
            .clone()
            .then(self_close.clone())
            .map(|((name, attributes), trailing)| -> Element {
                (build_shape(&name, attributes, vec![]), trailing)
            });

        // <name ...> text? children* </name>
        let closing = just(Token::LtSlash)
            .ignore_then(name.clone().map_with(|n, e| (n, e.span())))
            .then(tag_end.clone());

        let full_element = open
            .then(tag_end.clone())
            .then(element.repeated().collect::<Vec<Element>>())
            .then(closing)
            .try_map(
                |((((name, attributes), leading), children), ((close_name, close_span), trailing)),
                 _span| {
                    if close_name != name {
                        return Err(Rich::custom(
                            close_span,
                            format!(
                                "Mismatched closing tag: expected </{}>, found </{}>",
                                name, close_name
                            ),
                        ));
                    }

                    let mut nodes = Vec::new();
                    if !leading.is_empty() {
                        nodes.push(Node::Text(leading));
                    }
                    for (child, text) in children {
                        nodes.push(Node::Shape(child));
                        if !text.is_empty() {
                            nodes.push(Node::Text(text));
                        }
                    }

                    Ok((build_shape(&name, attributes, nodes), trailing))
                },
            );

        choice((empty_element, full_element)).boxed()
    });

    // Top-level elements may not be followed by loose text
    prologue.ignore_then(
        element
            .try_map(|(shape, trailing): Element, span| {
                if trailing.is_empty() {
                    Ok(shape)
                } else {
                    Err(Rich::custom(
                        span,
                        format!("Text outside of an element: \"{}\"", trailing),
                    ))
                }
            })
            .repeated()
            .collect(),
    )
    .then_ignore(end())
}
