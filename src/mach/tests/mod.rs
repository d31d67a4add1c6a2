use super::{Env, Eval, K};
use crate::lang::Cursor;

mod function_test;
mod value_test;

fn eval(env: &mut Env, line: &str) -> Option<K> {
    let mut cursor = Cursor::new(line);
    Eval::new(env).run(&mut cursor).unwrap()
}

fn eval_vec(env: &mut Env, line: &str) -> Vec<f64> {
    match eval(env, line) {
        Some(value) => value.samples().expect("expected a flat array").to_vec(),
        None => panic!("expression produced no value: {}", line),
    }
}
