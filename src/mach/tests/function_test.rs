use super::super::Env;
use super::{eval, eval_vec};

#[test]
fn test_literal_is_a_value() {
    let mut env = Env::new();
    let value = eval(&mut env, "{a*2}").unwrap();
    match &*value {
        super::super::Value::Fun(body) => assert_eq!(body, "a*2"),
        _ => panic!("a function literal must evaluate to a function value"),
    }
}

#[test]
fn test_juxtaposition_applies_monadically() {
    let mut env = Env::new();
    assert_eq!(eval_vec(&mut env, "{a*2} 1 2 3"), vec![2.0, 4.0, 6.0]);
}

#[test]
fn test_call_through_global() {
    let mut env = Env::new();
    eval(&mut env, "F:{a*2}");
    assert_eq!(eval_vec(&mut env, "F 1 2 3"), vec![2.0, 4.0, 6.0]);
}

#[test]
fn test_dyadic_call_through_global() {
    let mut env = Env::new();
    eval(&mut env, "G:{a+b}");
    assert_eq!(eval_vec(&mut env, "1 G 2"), vec![3.0]);
    assert_eq!(eval_vec(&mut env, "1 2 G 10 20"), vec![11.0, 22.0]);
}

#[test]
fn test_soft_arity_yields_empty_array() {
    let mut env = Env::new();
    eval(&mut env, "F:{a*2}");
    // zero arguments against a one-argument body: empty array, no abort
    let result = eval(&mut env, "F ()").unwrap();
    assert_eq!(result.len(), 0);
    assert!(result.samples().is_some());
}

#[test]
fn test_three_argument_bodies_always_soft_fail() {
    let mut env = Env::new();
    eval(&mut env, "H:{c}");
    let result = eval(&mut env, "1 H 2").unwrap();
    assert_eq!(result.len(), 0);
}

#[test]
fn test_extra_arguments_are_allowed() {
    let mut env = Env::new();
    // a body that names no parameter still accepts a juxtaposed argument
    assert_eq!(eval_vec(&mut env, "{1 2} 9"), vec![1.0, 2.0]);
    // and a one-parameter body ignores a second, dyadic argument
    eval(&mut env, "F:{a}");
    assert_eq!(eval_vec(&mut env, "5 F 6"), vec![5.0]);
}

#[test]
fn test_parameters_shadow_only_inside_calls() {
    let mut env = Env::new();
    // at top level the slots are unbound and `a` is still absolute value
    assert_eq!(eval_vec(&mut env, "a 0-3"), vec![3.0]);
    // inside a call the same letter reads the first argument
    assert_eq!(eval_vec(&mut env, "{a} 0-3"), vec![-3.0]);
}

#[test]
fn test_nested_calls_restore_arguments() {
    let mut env = Env::new();
    eval(&mut env, "F:{a*2}");
    eval(&mut env, "G:{(F a+1),a}");
    // the inner call rebinds `a`, the outer call still sees its own
    assert_eq!(eval_vec(&mut env, "G 3"), vec![8.0, 3.0]);
    // and after the calls the slots are unbound again
    assert_eq!(eval_vec(&mut env, "a 5"), vec![5.0]);
}

#[test]
fn test_globals_visible_inside_bodies() {
    let mut env = Env::new();
    eval(&mut env, "A:10");
    eval(&mut env, "F:{A+a}");
    assert_eq!(eval_vec(&mut env, "F 1"), vec![11.0]);
}

#[test]
fn test_rebinding_a_global_late_binds() {
    let mut env = Env::new();
    eval(&mut env, "F:{A+a}");
    eval(&mut env, "A:10");
    assert_eq!(eval_vec(&mut env, "F 1"), vec![11.0]);
    eval(&mut env, "A:20");
    assert_eq!(eval_vec(&mut env, "F 1"), vec![21.0]);
}

#[test]
fn test_recursion_terminates_by_arity() {
    let mut env = Env::new();
    // the recursive call drops the argument, so the inner call soft
    // fails to an empty array and the chain stops
    eval(&mut env, "F:{a,F ()}");
    assert_eq!(eval_vec(&mut env, "F 7"), vec![7.0]);
}

#[test]
fn test_function_as_operand_mismatches() {
    let mut env = Env::new();
    let mut cursor = crate::lang::Cursor::new("{a}+1");
    let result = super::super::Eval::new(&mut env).run(&mut cursor);
    assert!(result.is_err());
}
