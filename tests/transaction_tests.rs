/// Transaction tests
///
/// Tests for nested transactions (START, COMMIT, ABORT)
/// Run with: cargo test --test transaction_tests

use rustmemkv::{ReplConfig, Session, Store, TransactionStack};

fn run(script: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    {
        let config = ReplConfig::new().show_prompt(false);
        let mut session = Session::new(config, script.as_bytes(), &mut out, &mut err);
        session.run().unwrap();
    }
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn test_abort_hides_child_writes() {
    let (out, err) = run("WRITE k v1\nSTART\nWRITE k v2\nABORT\nREAD k\nQUIT\n");

    assert_eq!(out, "v1\nExiting...\n");
    assert!(err.is_empty());
}

#[test]
fn test_commit_publishes_child_writes() {
    let (out, err) = run("WRITE k v1\nSTART\nWRITE k v2\nCOMMIT\nREAD k\nQUIT\n");

    assert_eq!(out, "v2\nExiting...\n");
    assert!(err.is_empty());
}

#[test]
fn test_child_sees_parent_values() {
    let (out, _) = run("WRITE a 1\nSTART\nREAD a\nQUIT\n");
    assert_eq!(out, "1\nExiting...\n");
}

#[test]
fn test_commit_propagates_deletes() {
    let (out, err) = run("WRITE a 1\nSTART\nDELETE a\nCOMMIT\nREAD a\nQUIT\n");

    assert_eq!(out, "Exiting...\n");
    assert_eq!(err, "Key not found: a\n");
}

#[test]
fn test_abort_restores_deleted_key() {
    let (out, _) = run("WRITE a 1\nSTART\nDELETE a\nABORT\nREAD a\nQUIT\n");
    assert_eq!(out, "1\nExiting...\n");
}

#[test]
fn test_nested_commit_then_outer_abort() {
    let script = "\
WRITE a 0
START
WRITE a 1
START
WRITE a 2
COMMIT
READ a
ABORT
READ a
QUIT
";
    let (out, err) = run(script);

    assert_eq!(out, "2\n0\nExiting...\n");
    assert!(err.is_empty());
}

#[test]
fn test_nested_abort_then_outer_commit() {
    let script = "\
START
WRITE a 1
START
WRITE a 2
WRITE b 3
ABORT
COMMIT
READ a
READ b
QUIT
";
    let (out, err) = run(script);

    assert_eq!(out, "1\nExiting...\n");
    assert_eq!(err, "Key not found: b\n");
}

#[test]
fn test_commit_and_abort_at_root() {
    let (out, err) = run("WRITE a 1\nCOMMIT\nABORT\nREAD a\nQUIT\n");

    assert_eq!(out, "1\nExiting...\n");
    assert_eq!(
        err,
        "Error: you are not currently in a transaction\n\
         Error: you are not currently in a transaction\n"
    );
}

#[test]
fn test_extra_commit_after_nested_levels() {
    let (out, err) = run("START\nWRITE a 1\nCOMMIT\nCOMMIT\nREAD a\nQUIT\n");

    assert_eq!(out, "1\nExiting...\n");
    assert_eq!(err, "Error: you are not currently in a transaction\n");
}

#[test]
fn test_quit_inside_transaction_discards_pending() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let root = {
        let config = ReplConfig::new().show_prompt(false);
        let script = "WRITE a 1\nSTART\nWRITE a 2\nSTART\nQUIT\n";
        let mut session = Session::new(config, script.as_bytes(), &mut out, &mut err);
        session.run().unwrap();
        assert_eq!(session.depth(), 2);
        session.transactions().root().clone()
    };

    assert_eq!(root.get("a"), Some("1"));
    assert_eq!(String::from_utf8(out).unwrap(), "Exiting...\n");
}

#[test]
fn test_parent_store_untouched_while_child_open() {
    let mut stack = TransactionStack::with_root([("k", "v1")].into_iter().collect::<Store>());
    stack.begin();
    stack.current_mut().set("k", "v2");
    stack.current_mut().set("extra", "x");

    assert_eq!(stack.store_at(0).unwrap().get("k"), Some("v1"));
    assert_eq!(stack.store_at(0).unwrap().get("extra"), None);
    assert_eq!(stack.store_at(1).unwrap().get("k"), Some("v2"));
}

#[test]
fn test_deep_nesting() {
    let mut stack = TransactionStack::new();
    for level in 1..=1_000 {
        assert_eq!(stack.begin(), level);
        stack.current_mut().set("depth", level.to_string());
    }
    for _ in 0..999 {
        stack.commit().unwrap();
    }
    stack.abort().unwrap();

    assert_eq!(stack.depth(), 0);
    assert!(stack.root().is_empty());
}
