#![expect(missing_docs)]

use core::fmt::Write;

use readform::{ParserOptions, Status, StreamingParser, Value};

mod common;

use crate::common::{MULTI, ORIGINAL, STREAM};

fn render_stream(stream: &[&str]) -> String {
    let mut parser = StreamingParser::new(ParserOptions::default());
    let mut out = String::new();
    for chunk in stream {
        let n = parser.feed(chunk);
        writeln!(
            out,
            "{chunk:?} -> {n} {:?} depth {}",
            parser.status(),
            parser.depth()
        )
        .unwrap();
    }
    if let Some(value) = parser.value() {
        writeln!(out, "{value}").unwrap();
    }
    out
}

fn render_one(input: &str) -> String {
    let mut parser = StreamingParser::new(ParserOptions::default());
    let n = parser.feed(input);
    match parser.status() {
        Status::Full => format!("{input:?} -> {n} full {}", parser.value().unwrap()),
        Status::Error => format!("{input:?} -> {n} error {}", parser.error().unwrap()),
        Status::Pending => format!("{input:?} -> {n} pending depth {}", parser.depth()),
    }
}

#[test]
fn stream_joins_to_original() {
    assert_eq!(STREAM.concat(), ORIGINAL);
}

#[test]
fn snapshot_chunked_stream() {
    insta::assert_snapshot!(render_stream(&STREAM), @r#"
    "(def" -> 4 Pending depth 3
    "n gre" -> 5 Pending depth 3
    "et [na" -> 6 Pending depth 4
    "me]\n  {msg \"say \\" -> 17 Pending depth 4
    "\"hi\\\"\"\n   who" -> 13 Pending depth 4
    " name\n   n -3" -> 13 Pending depth 4
    ".5e" -> 3 Pending depth 4
    "2})" -> 3 Full depth 1
    (defn greet (array name) (obj msg (quote say "hi") who name n -350))
    "#);
}

#[test]
fn snapshot_single_inputs() {
    let inputs = [
        "(a b c)",
        "[1 2]",
        "{1 2}",
        "(abc)",
        "abc)",
        "-3.5e2 ",
        "- ",
        "(1 2",
        "(1]",
        "(def x \"hi\")",
        "1.5e1 ",
        "12ab ",
    ];
    let rendered: Vec<String> = inputs.iter().map(|i| render_one(i)).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r#"
    "(a b c)" -> 7 full (a b c)
    "[1 2]" -> 5 full (array 1 2)
    "{1 2}" -> 5 full (obj 1 2)
    "(abc)" -> 5 full (abc)
    "abc)" -> 3 full abc
    "-3.5e2 " -> 7 full -350
    "- " -> 2 full -
    "(1 2" -> 4 pending depth 3
    "(1]" -> 3 error unexpected closing delimiter ']' at 1:3
    "(def x \"hi\")" -> 12 full (def x (quote hi))
    "1.5e1 " -> 6 full 15
    "12ab " -> 5 error symbols cannot start with digits at 1:5
    "#);
}

#[test]
fn stream_of_values_with_take_value() {
    let mut parser = StreamingParser::new(ParserOptions::default());
    let mut rest = MULTI.as_bytes();
    let mut values = Vec::new();
    while !rest.is_empty() {
        let n = parser.feed(rest);
        rest = &rest[n..];
        match parser.status() {
            Status::Full => values.push(parser.take_value().unwrap()),
            Status::Pending => break,
            Status::Error => panic!("{}", parser.error().unwrap()),
        }
    }
    assert_eq!(parser.finish(), Status::Full);
    values.extend(parser.take_value());

    let rendered: Vec<String> = values.iter().map(Value::to_string).collect();
    assert_eq!(
        rendered,
        ["1", "(a)", "(array b c)", "(obj d e)", "(quote f)", "nil", "true"]
    );
}
