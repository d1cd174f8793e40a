use pretty_assertions::assert_eq;

use super::*;

fn error_at(text: &str, offset: usize, message: &str) -> SourceError {
    SourceError::at_offset("page.ejs", Arc::from(text), offset, message)
}

fn escape_angles(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

// === Location ===

#[test]
fn location_is_one_based() {
    let err = error_at("one\ntwo\nthree", 9, "bad");
    assert_eq!((err.line(), err.column()), (2, 1));
    assert_eq!(err.location(), "page.ejs:3:2");
}

#[test]
fn at_offset_counts_characters() {
    let err = error_at("é#x", 3, "bad");
    assert_eq!(err.column(), 2);
    assert_eq!(err.offset(), 3);
}

#[test]
fn display_includes_location_message_and_excerpt() {
    let err = error_at("#import foo\n", 7, "expected quoted string");
    assert_eq!(
        err.to_string(),
        "page.ejs:1:8 expected quoted string\n#import foo\n       ^"
    );
}

// === Caret excerpts ===

#[test]
fn caret_excerpt_without_context() {
    let err = error_at("a\nbcd\ne", 4, "bad");
    assert_eq!(
        err.excerpt_lines(Annotation::Caret, 0, str::to_owned),
        vec!["bcd".to_string(), "  ^".to_string()]
    );
}

#[test]
fn caret_excerpt_with_context_is_centred() {
    let text = "l0\nl1\nl2\nl3\nl4\nl5\nl6\n";
    let err = error_at(text, 12, "bad"); // start of l4
    assert_eq!(err.line(), 4);
    assert_eq!(err.excerpt(1), "l3\nl4\n^\nl5");
}

#[test]
fn context_is_clipped_at_both_ends() {
    let err = error_at("only\nlines\n", 0, "bad");
    assert_eq!(
        err.excerpt_lines(Annotation::Caret, 3, str::to_owned),
        vec!["only".to_string(), "^".to_string(), "lines".to_string()]
    );
}

#[test]
fn final_line_without_newline_is_excerpted() {
    let err = error_at("#import foo", 7, "expected quoted string");
    assert_eq!(err.excerpt(0), "#import foo\n       ^");
}

#[test]
fn error_at_end_after_trailing_newline() {
    let err = error_at("abc\n", 4, "unexpected end");
    assert_eq!(err.line(), 1);
    assert_eq!(
        err.excerpt_lines(Annotation::Caret, 1, str::to_owned),
        vec!["abc".to_string(), String::new(), "^".to_string()]
    );
}

#[test]
fn line_outside_source_yields_nothing() {
    let position = Position {
        offset: 0,
        line: 5,
        column: 0,
    };
    let err = SourceError::new("page.ejs", Arc::from("one line"), position, "bad");
    assert!(err.excerpt_lines(Annotation::Caret, 2, str::to_owned).is_empty());
}

// === Marker excerpts ===

#[test]
fn markers_wrap_the_offending_character() {
    let err = error_at("<a>#bad</a>", 4, "bad");
    let lines = err.excerpt_lines(
        Annotation::Markers {
            prefix: "<span class=\"marker\">",
            suffix: "</span>",
        },
        0,
        escape_angles,
    );
    assert_eq!(
        lines,
        vec!["&lt;a&gt;#<span class=\"marker\">b</span>ad&lt;/a&gt;".to_string()]
    );
}

#[test]
fn markers_past_end_of_line_wrap_nothing() {
    let err = error_at("ab\ncd", 2, "bad");
    let lines = err.excerpt_lines(
        Annotation::Markers {
            prefix: "[",
            suffix: "]",
        },
        0,
        str::to_owned,
    );
    assert_eq!(lines, vec!["ab[]".to_string()]);
}

#[test]
fn markers_respect_multibyte_characters() {
    let err = error_at("αβγ", 2, "bad");
    let lines = err.excerpt_lines(
        Annotation::Markers {
            prefix: "[",
            suffix: "]",
        },
        0,
        str::to_owned,
    );
    assert_eq!(lines, vec!["α[β]γ".to_string()]);
}
