use eroc_regex::{Error, parse};

fn parse_err(pattern: &[u8]) -> Error {
    match parse(pattern) {
        Ok(ast) => panic!(
            "Parser accepted pattern {} as {ast:?}",
            pattern.escape_ascii()
        ),
        Err(err) => err,
    }
}

#[test]
fn test_error_classification() {
    let cases: &[(&[u8], &str)] = &[
        (b"", "EmptyPattern"),
        (b"|.", "DanglingAlternation"),
        (b".|", "UnbalancedExpression"),
        (b"(", "UnbalancedExpression"),
        (b")", "MalformedCapture"),
        (b"()", "EmptyCaptureGroup"),
        (b"[", "UnterminatedCharacterClass"),
        (b"[]", "EmptyCharacterClass"),
        (b"[^]", "EmptyCharacterClass"),
        (b"*", "DanglingQuantifier"),
        (b"(*", "DanglingQuantifier"),
        (b"a|*", "DanglingQuantifier"),
        (b"[9-0]", "ReversedRange"),
        (b"\\q", "InvalidEscape"),
        (b"a\0", "InvalidCharacter"),
    ];

    for &(pattern, kind) in cases {
        for _ in 0..3 {
            assert_eq!(
                parse_err(pattern).kind_name(),
                kind,
                "pattern {}",
                pattern.escape_ascii()
            );
        }
    }
}

#[test]
fn test_error_positions() {
    assert_eq!(parse_err(b""), Error::EmptyPattern);
    assert_eq!(parse_err(b"|."), Error::DanglingAlternation { pos: 0 });
    assert_eq!(parse_err(b".|"), Error::UnbalancedExpression { pos: 2 });
    assert_eq!(parse_err(b"ab)"), Error::MalformedCapture { pos: 2 });
    assert_eq!(parse_err(b"a()"), Error::EmptyCaptureGroup { pos: 2 });
    assert_eq!(
        parse_err(b"ab[cd"),
        Error::UnterminatedCharacterClass { pos: 2 }
    );
    assert_eq!(parse_err(b"a[^]"), Error::EmptyCharacterClass { pos: 1 });
    assert_eq!(
        parse_err(b"a+*?|+"),
        Error::DanglingQuantifier { pos: 5, lit: b'+' }
    );
    assert_eq!(
        parse_err(b"[a9-0]"),
        Error::ReversedRange {
            pos: 4,
            start: b'9',
            end: b'0'
        }
    );
}

#[test]
fn test_dangling_alternation() {
    assert!(matches!(
        parse_err(b"a||b"),
        Error::DanglingAlternation { pos: 2 }
    ));
    assert!(matches!(
        parse_err(b"(|a)"),
        Error::DanglingAlternation { pos: 1 }
    ));
    assert!(matches!(
        parse_err(b"(a|)"),
        Error::DanglingAlternation { pos: 3 }
    ));
}

#[test]
fn test_unbalanced_captures() {
    assert!(matches!(parse_err(b"(a"), Error::UnbalancedExpression { .. }));
    assert!(matches!(parse_err(b"a(b"), Error::UnbalancedExpression { .. }));
    assert!(matches!(parse_err(b"((a)"), Error::UnbalancedExpression { .. }));
    assert!(matches!(parse_err(b"(a))"), Error::MalformedCapture { pos: 3 }));
    assert!(matches!(parse_err(b"a)(b"), Error::MalformedCapture { pos: 1 }));
}

#[test]
fn test_unterminated_classes() {
    for pattern in [&b"[a"[..], b"[^", b"[a-", b"[a-z", b"x[\\]"] {
        assert!(
            matches!(parse_err(pattern), Error::UnterminatedCharacterClass { .. }),
            "pattern {}",
            pattern.escape_ascii()
        );
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_err(b"a\\q").to_string(),
        "invalid escape sequence '\\q' at 1"
    );
    assert_eq!(
        parse_err(b"[z-a]").to_string(),
        "invalid range 'z-a' at 3"
    );
    assert_eq!(
        parse_err(b"*").to_string(),
        "nothing to repeat for '*' at 0"
    );
}
