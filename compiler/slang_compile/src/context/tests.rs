use std::path::PathBuf;

use super::*;

#[test]
fn visited_set_dedupes() {
    let mut cx = Context::default();
    let a = Resource::Local(PathBuf::from("/site/a.ejs"));
    assert!(cx.add_visited(a.clone()));
    assert!(!cx.add_visited(a));
}

#[test]
fn local_and_remote_are_distinct() {
    let mut cx = Context::default();
    assert!(cx.add_visited(Resource::Local(PathBuf::from("/x.js"))));
    assert!(cx.add_visited(Resource::Remote("https://cdn.test/x.js".to_string())));
    assert!(!cx.add_visited(Resource::Local(PathBuf::from("/x.js"))));
}

#[test]
fn fresh_contexts_share_nothing() {
    let resource = Resource::Remote("http://a.test/".to_string());
    let mut first = Context::default();
    assert!(first.add_visited(resource.clone()));
    let mut second = Context::default();
    assert!(second.add_visited(resource));
}

#[test]
fn options_are_kept() {
    let cx = Context::new(ContextOptions::ANNOTATE_IMPORTS);
    assert!(cx.options().contains(ContextOptions::ANNOTATE_IMPORTS));
    assert!(!cx.options().contains(ContextOptions::VERBOSE));
    assert_eq!(Context::default().options(), ContextOptions::empty());
}
