use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("slang").chain(args.iter().copied())).unwrap()
}

// === Routes ===

#[test]
fn route_splits_on_first_equals() {
    assert_eq!(
        parse_route("/css=/styles").unwrap(),
        ("/css".to_string(), "/styles".to_string())
    );
    assert_eq!(
        parse_route(" /q = a=b ").unwrap(),
        ("/q".to_string(), "a=b".to_string())
    );
}

#[test]
fn route_requires_a_remote_side() {
    assert!(parse_route("/styles").is_err());
    assert!(parse_route("=/styles").is_err());
}

// === Commands ===

#[test]
fn run_with_global_flags() {
    let cli = parse(&[
        "run",
        "site",
        "--port",
        "8000",
        "--proxy",
        "http://localhost:8080",
        "--route",
        "/css=/styles",
        "--route",
        "/css=/vendor",
        "--strict",
    ]);
    let Command::Run { root } = &cli.command else {
        panic!("expected run, got {:?}", cli.command);
    };
    assert_eq!(root.as_deref(), Some(std::path::Path::new("site")));
    assert_eq!(cli.port, Some(8000));
    assert_eq!(cli.proxy.unwrap().as_str(), "http://localhost:8080/");
    assert_eq!(cli.routes.len(), 2);
    assert!(cli.strict);
}

#[test]
fn build_defaults_output() {
    let cli = parse(&["build", "assets", "--copy"]);
    let Command::Build { output, inputs } = &cli.command else {
        panic!("expected build, got {:?}", cli.command);
    };
    assert_eq!(output, &PathBuf::from("./slang.out"));
    assert_eq!(inputs, &vec![PathBuf::from("assets")]);
    assert!(cli.copy);
}

#[test]
fn build_requires_inputs() {
    assert!(Cli::try_parse_from(["slang", "build"]).is_err());
}

#[test]
fn bad_proxy_url_is_rejected() {
    assert!(Cli::try_parse_from(["slang", "run", "--proxy", "not a url"]).is_err());
}
