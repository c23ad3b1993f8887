// tests/unit_record.rs
use charnet_core::error::{CharnetError, Result};
use charnet_core::record::parser::{from_reader, from_str};
use charnet_core::record::Record;
use std::io::Cursor;

fn parse(text: &str) -> Result<Vec<Record>> {
    from_str("test", text).collect()
}

#[test]
fn test_regions_and_comments() {
    let records = parse("* cast\nAA alice\n* more cast\nAB bob the builder\n\n* chapters\n1:AA,AB\n").unwrap();
    assert_eq!(records.len(), 3);
    match &records[1] {
        Record::Vertex(v) => {
            assert_eq!(v.label, "AB");
            assert_eq!(v.name, "bob the builder");
            assert_eq!(v.line, 4);
        }
        other => panic!("expected vertex, got {other:?}"),
    }
    match &records[2] {
        Record::Chapter(c) => {
            assert_eq!(c.tag, "1");
            assert_eq!(c.groups, vec![vec!["AA".to_string(), "AB".to_string()]]);
            assert_eq!(c.line, 7);
        }
        other => panic!("expected chapter, got {other:?}"),
    }
}

#[test]
fn test_further_blank_lines_are_ignored() {
    let records = parse("AA a\n\n1:AA\n\n\n2:AA\n").unwrap();
    assert_eq!(records.len(), 3);
    assert!(matches!(records[2], Record::Chapter(ref c) if c.tag == "2"));
}

#[test]
fn test_malformed_lines() {
    let cases = [
        ("AA\n", 1, "vertex without name"),
        ("AA a\nAB \n", 2, "blank name"),
        ("AA a\n\nno colon here\n", 3, "chapter without colon"),
        ("AA a\n\n:AA\n", 3, "empty chapter tag"),
        ("AA a\n\n1:AA,,AB\n", 3, "empty label"),
        ("AA a\n\n1:AA,AA\n", 3, "repeated label in group"),
        ("A;B a\n", 1, "separator in label"),
    ];
    for (text, expected_line, desc) in cases {
        match parse(text) {
            Err(CharnetError::MalformedRecord { line, ref book, .. }) => {
                assert_eq!(line, expected_line, "Failed: {desc}");
                assert_eq!(book, "test", "Failed: {desc}");
            }
            other => panic!("Failed: {desc}: {other:?}"),
        }
    }
}

#[test]
fn test_parser_stops_after_error() {
    let mut parser = from_str("test", "AA\nAB b\n");
    assert!(matches!(parser.next(), Some(Err(_))));
    assert!(parser.next().is_none());
}

#[test]
fn test_empty_group_contributes_nothing() {
    let records = parse("AA a\nAB b\n\n1:AA,AB;;\n").unwrap();
    match &records[2] {
        Record::Chapter(c) => assert_eq!(c.pair_count(), 1),
        other => panic!("expected chapter, got {other:?}"),
    }
}

#[test]
fn test_crlf_reader() {
    let reader = Cursor::new("AA alice\r\nAB bob\r\n\r\n1:AA,AB\r\n");
    let records: Vec<Record> = from_reader("crlf", reader).collect::<Result<_>>().unwrap();
    assert_eq!(records.len(), 3);
    assert!(matches!(records[1], Record::Vertex(ref v) if v.name == "bob"));
}
