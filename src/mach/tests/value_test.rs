use super::super::{dyadic, Value};
use super::{eval, eval_vec};
use crate::lang::Dyad;
use std::sync::Arc;

#[test]
fn test_scalars_are_one_element_arrays() {
    let scalar = Value::scalar(3.5);
    assert!(scalar.is_scalar());
    assert_eq!(scalar.len(), 1);
    assert_eq!(scalar.samples(), Some(&[3.5][..]));
}

#[test]
fn test_function_values_are_not_arrays() {
    let fun = Value::fun("a+b");
    assert_eq!(fun.len(), 0);
    assert!(fun.samples().is_none());
    assert!(!fun.is_scalar());
}

#[test]
fn test_nested_values_share_children() {
    let child = Value::num(vec![1.0, 2.0]);
    let nested = Value::nest(vec![child.clone(), child.clone()]);
    assert_eq!(Arc::strong_count(&child), 3);
    drop(nested);
    assert_eq!(Arc::strong_count(&child), 1);
}

#[test]
fn test_join_preserves_element_identity() {
    let left_child = Value::num(vec![1.0, 2.0]);
    let right_child = Value::num(vec![3.0]);
    let left = Value::nest(vec![left_child.clone()]);
    let right = Value::nest(vec![right_child.clone()]);
    let joined = dyadic::apply(Dyad::Join, left, right).unwrap();
    match &*joined {
        Value::Nest(items) => {
            assert_eq!(items.len(), 2);
            assert!(Arc::ptr_eq(&items[0], &left_child));
            assert!(Arc::ptr_eq(&items[1], &right_child));
        }
        _ => panic!("joining nested arrays must stay nested"),
    }
}

#[test]
fn test_join_promotes_functions_into_nests() {
    let mut env = super::super::Env::new();
    let pair = eval(&mut env, "{a},{a+b}").unwrap();
    match &*pair {
        Value::Nest(items) => {
            assert_eq!(items.len(), 2);
            assert!(matches!(&*items[0], Value::Fun(_)));
        }
        _ => panic!("joining function values must build a nest"),
    }
}

#[test]
fn test_variable_lookup_shares_not_copies() {
    let mut env = super::super::Env::new();
    eval(&mut env, "A:1 2 3");
    let first = eval(&mut env, "A").unwrap();
    let second = eval(&mut env, "A").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_oversized_allocation_is_recoverable() {
    let mut env = super::super::Env::new();
    let mut cursor = crate::lang::Cursor::new("!999999999999");
    let result = super::super::Eval::new(&mut env).run(&mut cursor);
    assert!(result.is_err());
    // the session keeps working afterward
    assert_eq!(eval_vec(&mut env, "1+1"), vec![2.0]);
}
