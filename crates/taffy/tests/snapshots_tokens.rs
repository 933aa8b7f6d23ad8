#![expect(missing_docs)]

use std::fmt::Write;

use taffy::{Archive, Scanner};

const DOCUMENT: &[u8] = b"leading\n-- a --\n\tx\n-- b --\n\n-- c --\n-- d --\n- not a header -\n\ttail";

fn render_tokens(input: &[u8]) -> String {
    let mut scanner = Scanner::new(input);
    let mut out = String::new();
    loop {
        match scanner.next_token() {
            Ok(token) => writeln!(out, "{token:?}").unwrap(),
            Err(err) => {
                writeln!(out, "Err({err:?}) {err}").unwrap();
                return out;
            }
        }
    }
}

fn render_archive(input: &[u8]) -> String {
    let archive = Archive::parse(input);
    let mut out = String::new();
    writeln!(out, "canonical: {}", archive.is_canonical()).unwrap();
    writeln!(out, "comment: {:?}", archive.comment()).unwrap();
    for section in &archive {
        writeln!(out, "{:?} => {:?}", section.title, section.body).unwrap();
    }
    out
}

#[test]
fn snapshot_tokens() {
    insta::assert_snapshot!(render_tokens(DOCUMENT), @r#"
    Content("leading")
    Header("a")
    Content("x")
    Header("b")
    Content("\n")
    Header("c")
    Content("")
    Header("d")
    Content("- not a header -\ntail")
    Err(EndOfInput) end of input
    "#);
}

#[test]
fn snapshot_archive() {
    insta::assert_snapshot!(render_archive(DOCUMENT), @r#"
    canonical: false
    comment: Some("leading")
    "a" => "x"
    "b" => "\n"
    "c" => ""
    "d" => "- not a header -\ntail"
    "#);
}
