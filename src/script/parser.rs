use chumsky::{prelude::*, Stream};

use super::{ast::*, lexer::Token};
use crate::document::{Span, Spanned};

pub type ParseError<'src> = Simple<Token<'src>, Span>;

/// Parses the tokens of a whole script.
///
/// `len` is the length of the source in bytes, used as the span of the end of input.
pub fn parse<'src>(
    tokens: Vec<Spanned<Token<'src>>>,
    len: usize,
) -> Result<Script, Vec<ParseError<'src>>> {
    let end_of_input = Span::new(len, len);
    let stream = Stream::from_iter(
        end_of_input,
        tokens
            .into_iter()
            .map(|Spanned { value, span }| (value, span)),
    );

    script_parser().parse(stream)
}

fn script_parser<'src>() -> impl Parser<Token<'src>, Script, Error = ParseError<'src>> {
    command_parser()
        .repeated()
        .then_ignore(end())
        .map(Script)
        .labelled("script")
}

fn command_parser<'src>(
) -> impl Parser<Token<'src>, Spanned<Command>, Error = ParseError<'src>> + Clone {
    let label = label_parser();

    // vertex A B ...
    let vertex = just(Token::Vertex)
        .ignore_then(label.clone().repeated().at_least(1))
        .map(Command::Vertex)
        .labelled("vertex command");

    // edge A B
    let edge = just(Token::Edge)
        .ignore_then(label.clone())
        .then(label)
        .map(|(v, w)| Command::Edge(v, w))
        .labelled("edge command");

    let print = just(Token::Print)
        .to(Command::Print)
        .labelled("print command");

    vertex.or(edge).or(print).map_with_span(Spanned::new)
}

fn label_parser<'src>(
) -> impl Parser<Token<'src>, Spanned<Label>, Error = ParseError<'src>> + Clone {
    select! {
        Token::Word(word) => Label::new(word),
        Token::Quoted(text) => Label::new(text),
    }
    .map_with_span(Spanned::new)
    .labelled("label")
}

/// Turns a parser error into a one-line message.
pub fn describe(error: &ParseError) -> String {
    let found = match error.found() {
        Some(token) => format!("`{token}`"),
        None => "end of input".to_string(),
    };

    match error.label() {
        Some(label) => format!("Unexpected {found} in {label}"),
        None => format!("Unexpected {found}"),
    }
}
