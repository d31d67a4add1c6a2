use super::{Value, K};
use crate::error;
use crate::lang::{Dyad, Error};

type Result<T> = std::result::Result<T, Error>;

/// The scan adverb: turns a reducing combine rule into a same-length
/// array of running values, left to right in one pass. An operator with
/// no accumulator rule returns the operand unchanged — a permissive
/// default, kept on purpose so experimentation stays harmless.
pub fn apply(op: Dyad, operand: K) -> Result<K> {
    match &*operand {
        Value::Nest(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(apply(op, item.clone())?);
            }
            Ok(Value::nest(out))
        }
        Value::Fun(_) => Err(error!(TypeMismatch; "NOT A NUMERIC ARRAY")),
        Value::Num(v) => {
            use Dyad::*;
            let out = match op {
                Add => running(v, 0.0, |acc, x| acc + x),
                Sub => running(v, 0.0, |acc, x| acc - x),
                Mul => running(v, 1.0, |acc, x| acc * x),
                Div => running(v, 1.0, |acc, x| if x == 0.0 { acc } else { acc / x }),
                Min => running_from_first(v, f64::min),
                Max => running_from_first(v, f64::max),
                Pow => running_from_first(v, f64::powf),
                _ => v.clone(),
            };
            Ok(Value::num(out))
        }
    }
}

fn running(v: &[f64], seed: f64, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let mut acc = seed;
    v.iter()
        .map(|&x| {
            acc = f(acc, x);
            acc
        })
        .collect()
}

/// Seeded by the first element itself; the rule applies from the second
/// element on.
fn running_from_first(v: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(v.len());
    let mut iter = v.iter();
    if let Some(&first) = iter.next() {
        let mut acc = first;
        out.push(acc);
        for &x in iter {
            acc = f(acc, x);
            out.push(acc);
        }
    }
    out
}
