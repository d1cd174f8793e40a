use super::*;

#[test]
fn stylesheet_expands_variables() {
    let css = stylesheet("$c: red;\na { color: $c; }\n", Path::new("."), false).unwrap();
    assert!(css.contains("color: red"), "{css}");
}

#[test]
fn stylesheet_compresses() {
    let css = stylesheet("a {\n  color: red;\n}\n", Path::new("."), true).unwrap();
    assert!(css.contains("a{color:red}"), "{css}");
}

#[test]
fn stylesheet_reports_errors_as_text() {
    let message = stylesheet("a { color: $missing; }", Path::new("."), false).unwrap_err();
    assert!(message.contains("Undefined variable"), "{message}");
}

#[test]
fn stylesheet_imports_from_load_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("_colors.scss"), "$accent: #00f;\n").unwrap();
    let css = stylesheet(
        "@import \"colors\";\nb { color: $accent; }\n",
        dir.path(),
        false,
    )
    .unwrap();
    assert!(css.contains("color: #00f"), "{css}");
}

#[test]
fn minify_removes_layout() {
    let source = "var answer = 42;\n\n\nfunction get() {\n    return answer;\n}\n";
    let minified = minify(source);
    assert!(minified.len() < source.len());
    assert!(!minified.contains("\n\n"));
    assert!(minified.contains("42"));
}
