use super::{Value, K};
use crate::error;
use crate::lang::{Error, Monad};
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// Applies a monadic verb, consuming the operand reference.
///
/// A nested operand recurses into every child, so all monadic verbs are
/// rank polymorphic for free. Function values are not verb operands.
pub fn apply(verb: Monad, operand: K) -> Result<K> {
    match &*operand {
        Value::Nest(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(apply(verb, item.clone())?);
            }
            Ok(Value::nest(out))
        }
        Value::Fun(_) => Err(error!(TypeMismatch; "NOT A NUMERIC ARRAY")),
        Value::Num(v) => flat(verb, v),
    }
}

fn flat(verb: Monad, v: &[f64]) -> Result<K> {
    use Monad::*;
    match verb {
        Iota => {
            let n = v.first().map(|&x| x as i64).unwrap_or(0).max(0) as usize;
            Value::check_len(n)?;
            Ok(Value::num((0..n).map(|i| i as f64).collect()))
        }
        Total => Ok(Value::scalar(v.iter().sum())),
        Peak => Ok(Value::scalar(v.iter().fold(0.0, |m, &x| x.abs().max(m)))),
        Even => Ok(Value::num(half(v, 0))),
        Odd => Ok(Value::num(half(v, 1))),
        Sin => elementwise(v, f64::sin),
        Tan => elementwise(v, f64::tan),
        Tanh => elementwise(v, f64::tanh),
        Abs => elementwise(v, f64::abs),
        Sqrt => elementwise(v, |x| x.abs().sqrt()),
        Log => elementwise(v, |x| x.abs().ln()),
        Exp => elementwise(v, f64::exp),
        Floor => elementwise(v, f64::floor),
        Pi => elementwise(v, |x| std::f64::consts::PI * x),
        Decay => elementwise(v, |x| (-5.0 * x).exp()),
        Clip => elementwise(v, |x| (3.0 * x).tanh()),
        Crush => elementwise(v, |x| (4.0 * x).floor() / 4.0),
        Reverse => Ok(Value::num(v.iter().rev().cloned().collect())),
        Noise => {
            let mut rng = rand::thread_rng();
            Ok(Value::num(
                v.iter().map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect(),
            ))
        }
        Grit => indexed(v, grit),
        Metal => indexed(v, metal),
        Ramp => indexed(v, |i| if i < 10 { i as f64 / 10.0 } else { 1.0 }),
        Id => Ok(Value::num(v.to_vec())),
    }
}

fn elementwise(v: &[f64], f: impl Fn(f64) -> f64) -> Result<K> {
    Ok(Value::num(v.iter().map(|&x| f(x)).collect()))
}

/// Output sample depends only on its index, never the input value.
fn indexed(v: &[f64], f: impl Fn(usize) -> f64) -> Result<K> {
    Ok(Value::num((0..v.len()).map(f).collect()))
}

/// Every second sample of an interleaved stereo pair. Fewer than two
/// input samples yields nothing.
fn half(v: &[f64], offset: usize) -> Vec<f64> {
    if v.len() < 2 {
        return vec![];
    }
    (0..v.len() / 2).map(|i| v[2 * i + offset]).collect()
}

/// Deterministic bit noise from a hashed sample index.
fn grit(i: usize) -> f64 {
    let clock = i as u32;
    let h = clock.wrapping_mul(13) ^ (clock >> 5) ^ clock.wrapping_mul(193);
    if h & 128 != 0 {
        0.7
    } else {
        -0.7
    }
}

const METAL_FREQS: [f64; 6] = [2.43, 3.01, 3.52, 4.11, 5.23, 6.78];

/// Mean of six hard-squared oscillators, an inharmonic metallic timbre.
fn metal(i: usize) -> f64 {
    let mut sum = 0.0;
    for freq in METAL_FREQS.iter() {
        sum += if (i as f64 * 0.1 * freq).sin() > 0.0 {
            1.0
        } else {
            -1.0
        };
    }
    sum / 6.0
}
