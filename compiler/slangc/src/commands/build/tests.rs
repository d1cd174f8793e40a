use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;
use crate::config::{FileConfig, Settings};

fn tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (path, contents) in files {
        let path = dir.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    dir
}

fn config(text: &str) -> BuildConfig {
    use clap::Parser;
    let cli = crate::cli::Cli::try_parse_from(["slang", "build", "in"]).unwrap();
    let file = FileConfig::parse(Path::new("slang.conf"), text).unwrap();
    Settings::resolve(&cli, file).unwrap().build
}

fn run(config: &BuildConfig, output: &Path, inputs: &[PathBuf]) -> (BuildSummary, String) {
    let mut progress = Vec::new();
    let summary = build(config, output, inputs, false, &mut progress).unwrap();
    (summary, String::from_utf8(progress).unwrap())
}

// === Directory inputs ===

#[test]
fn compiles_and_relocates_a_tree() {
    let src = tree(&[
        ("styles/site.scss", "$c: blue;\na { color: $c; }\n"),
        ("js/lib.js", "function lib() {}\n"),
        ("js/main.ejs", "#import \"lib.js\"\nlib();\n"),
        ("logo.png", "png"),
    ]);
    let out = tempfile::tempdir().unwrap();

    let (summary, progress) = run(&config(""), out.path(), &[src.path().to_path_buf()]);

    let css = fs::read_to_string(out.path().join("styles/site.css")).unwrap();
    assert!(css.contains("color: blue"), "{css}");
    let js = fs::read_to_string(out.path().join("js/main.js")).unwrap();
    assert!(js.contains("function lib() {}"), "{js}");
    assert!(js.contains("lib();"), "{js}");
    assert!(!out.path().join("logo.png").exists());
    assert_eq!(
        summary,
        BuildSummary {
            compiled: 2,
            copied: 0,
            skipped: 2,
        }
    );
    assert!(progress.contains("[+] "), "{progress}");
    assert!(progress.contains("[ ] "), "{progress}");
}

#[test]
fn copies_unmanaged_files_when_enabled() {
    let src = tree(&[("logo.png", "png"), ("notes.md", "notes")]);
    let out = tempfile::tempdir().unwrap();
    let config = config("[unmanaged]\ncopy = true\nexclude_from_copy = [\"*.md\"]\n");

    let (summary, progress) = run(&config, out.path(), &[src.path().to_path_buf()]);

    assert_eq!(fs::read_to_string(out.path().join("logo.png")).unwrap(), "png");
    assert!(!out.path().join("notes.md").exists());
    assert_eq!(summary.copied, 1);
    assert!(progress.contains("[~] "), "{progress}");
}

#[test]
fn excluded_sources_are_skipped() {
    let src = tree(&[("_partial.scss", "a { b: c; }\n"), ("site.scss", "a { b: c; }\n")]);
    let out = tempfile::tempdir().unwrap();
    let config = config("[stylesheet]\nexclude = [\"_*.scss\"]\n");

    let (summary, _) = run(&config, out.path(), &[src.path().to_path_buf()]);

    assert!(out.path().join("site.css").exists());
    assert!(!out.path().join("_partial.css").exists());
    assert_eq!(summary.compiled, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn hidden_entries_are_ignored() {
    let src = tree(&[(".git/config.scss", "a {}\n"), (".hidden.scss", "a {}\n")]);
    let out = tempfile::tempdir().unwrap();

    let (summary, _) = run(&config(""), out.path(), &[src.path().to_path_buf()]);

    assert_eq!(summary, BuildSummary::default());
    assert!(!out.path().join(".git").exists());
}

#[test]
fn output_tree_inside_input_is_not_walked() {
    let src = tree(&[("site.scss", "a { b: c; }\n"), ("out/old.scss", "a {}\n")]);
    let out = src.path().join("out");

    let (summary, _) = run(&config(""), &out, &[src.path().to_path_buf()]);

    assert_eq!(summary.compiled, 1);
    assert!(out.join("site.css").exists());
    assert!(!out.join("old.css").exists());
}

// === File inputs ===

#[test]
fn file_input_lands_at_output_root() {
    let src = tree(&[("deep/dir/app.min.js", "function  a ( ) { return 1 ; }\n")]);
    let out = tempfile::tempdir().unwrap();

    let (summary, _) = run(
        &config(""),
        out.path(),
        &[src.path().join("deep/dir/app.min.js")],
    );

    assert_eq!(summary.compiled, 1);
    assert!(out.path().join("app.js").exists());
}

// === Errors ===

#[test]
fn compile_error_aborts_the_build() {
    let src = tree(&[("bad.ejs", "#import nope\n")]);
    let out = tempfile::tempdir().unwrap();

    let err = build(
        &config(""),
        out.path(),
        &[src.path().to_path_buf()],
        true,
        &mut Vec::new(),
    )
    .unwrap_err();
    let BuildError::Compile { path, source } = &err else {
        panic!("expected a compile error, got {err:?}");
    };
    assert!(path.ends_with("bad.ejs"));
    assert!(matches!(source, CompileError::Syntax(_)));
}

#[test]
fn missing_input_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    let err = build(
        &config(""),
        out.path(),
        &[out.path().join("missing")],
        true,
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Read { .. }));
}

#[test]
fn quiet_build_prints_nothing() {
    let src = tree(&[("site.scss", "a { b: c; }\n")]);
    let out = tempfile::tempdir().unwrap();
    let mut progress = Vec::new();
    build(
        &config(""),
        out.path(),
        &[src.path().to_path_buf()],
        true,
        &mut progress,
    )
    .unwrap();
    assert!(progress.is_empty());
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn progress_write_failure_is_reported() {
    let src = tree(&[("site.scss", "a { b: c; }\n")]);
    let out = tempfile::tempdir().unwrap();
    let err = build(
        &config(""),
        out.path(),
        &[src.path().to_path_buf()],
        false,
        &mut ClosedPipe,
    )
    .unwrap_err();
    let BuildError::Progress(source) = &err else {
        panic!("expected a progress error, got {err:?}");
    };
    assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
}
