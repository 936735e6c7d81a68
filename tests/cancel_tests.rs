// Host-side tests for cancellation tokens.

#![allow(dead_code)]
mod cancel {
    include!("../src/model/cancel.rs");
}

use cancel::CancelToken;

#[test]
fn fresh_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn clones_share_the_flag() {
    let a = CancelToken::new();
    let b = a.clone();
    b.cancel();
    assert!(a.is_cancelled());
}

#[test]
fn parent_cancel_reaches_grandchildren() {
    let root = CancelToken::new();
    let child = root.child();
    let grandchild = child.child();
    assert!(!grandchild.is_cancelled());
    root.cancel();
    assert!(child.is_cancelled());
    assert!(grandchild.is_cancelled());
}

#[test]
fn child_cancel_leaves_parent_and_siblings() {
    let root = CancelToken::new();
    let a = root.child();
    let b = root.child();
    a.cancel();
    assert!(a.is_cancelled());
    assert!(!b.is_cancelled());
    assert!(!root.is_cancelled());
}
