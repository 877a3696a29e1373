use fwjs_ir::Name;
use pretty_assertions::assert_eq;

use super::{DeclareError, Environment};
use crate::Value;

const X: Name = Name::from_raw(100);
const Y: Name = Name::from_raw(101);

#[test]
fn create_then_resolve() {
    let env = Environment::new();
    env.create_var(X, Value::Int(1)).unwrap();
    assert_eq!(env.resolve_var(X), Value::Int(1));
    assert!(env.contains_local(X));
}

#[test]
fn duplicate_in_same_scope_fails() {
    let env = Environment::new();
    env.create_var(X, Value::Int(99)).unwrap();
    assert_eq!(
        env.create_var(X, Value::Int(99)),
        Err(DeclareError::AlreadyDeclared)
    );
    assert_eq!(env.resolve_var(X), Value::Int(99));
}

#[test]
fn shadowing_in_child_is_allowed() {
    let parent = Environment::new();
    parent.create_var(X, Value::Int(1)).unwrap();
    let child = parent.child();
    child.create_var(X, Value::Int(2)).unwrap();
    assert_eq!(child.resolve_var(X), Value::Int(2));
    assert_eq!(parent.resolve_var(X), Value::Int(1));
}

#[test]
fn undeclared_resolves_to_null() {
    let root = Environment::new();
    let child = root.child().child();
    assert_eq!(root.resolve_var(X), Value::Null);
    assert_eq!(child.resolve_var(X), Value::Null);
    assert_eq!(child.lookup(X), None);
}

#[test]
fn resolve_walks_ancestors() {
    let root = Environment::new();
    root.create_var(X, Value::Int(5)).unwrap();
    let grandchild = root.child().child();
    assert_eq!(grandchild.resolve_var(X), Value::Int(5));
    assert!(!grandchild.contains_local(X));
}

#[test]
fn update_writes_nearest_binding() {
    let parent = Environment::new();
    parent.create_var(X, Value::Int(1)).unwrap();
    let child = parent.child();
    child.create_var(X, Value::Int(2)).unwrap();

    child.update_var(X, Value::Int(3));

    assert_eq!(child.resolve_var(X), Value::Int(3));
    assert_eq!(parent.resolve_var(X), Value::Int(1));
}

#[test]
fn update_reaches_ancestor_binding() {
    let parent = Environment::new();
    parent.create_var(X, Value::Int(1)).unwrap();
    let child = parent.child();

    child.update_var(X, Value::Int(7));

    assert_eq!(parent.resolve_var(X), Value::Int(7));
    assert!(!child.contains_local(X));
}

#[test]
fn update_of_unknown_name_creates_global() {
    let root = Environment::new();
    let middle = root.child();
    let leaf = middle.child();

    leaf.update_var(Y, Value::Bool(true));

    assert!(root.contains_local(Y));
    assert!(!middle.contains_local(Y));
    assert!(!leaf.contains_local(Y));
    assert_eq!(leaf.resolve_var(Y), Value::Bool(true));
}

#[test]
fn handles_share_the_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.create_var(X, Value::Int(4)).unwrap();
    assert_eq!(env.resolve_var(X), Value::Int(4));
    assert_eq!(env.child().resolve_var(X), Value::Int(4));
}
