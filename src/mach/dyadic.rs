use super::{Value, K};
use crate::error;
use crate::lang::{Dyad, Error};

type Result<T> = std::result::Result<T, Error>;

/// Applies a dyadic verb, consuming one reference to each operand.
///
/// Two nested operands recurse pairwise over the shorter length; a scalar
/// against a nested operand broadcasts into every child. Concatenation is
/// special-cased first so joining nested arrays shares the original
/// elements instead of recursing into them.
pub fn apply(verb: Dyad, a: K, b: K) -> Result<K> {
    match (&*a, &*b) {
        (Value::Num(x), Value::Num(y)) => flat(verb, x, y),
        _ if verb == Dyad::Join => join_nested(&a, &b),
        (Value::Fun(_), _) | (_, Value::Fun(_)) => {
            Err(error!(TypeMismatch; "NOT A NUMERIC ARRAY"))
        }
        (Value::Nest(xs), Value::Nest(ys)) => {
            let n = xs.len().min(ys.len());
            let mut out = Vec::with_capacity(n);
            for i in 0..n {
                out.push(apply(verb, xs[i].clone(), ys[i].clone())?);
            }
            Ok(Value::nest(out))
        }
        (Value::Num(x), Value::Nest(ys)) if x.len() == 1 => {
            let mut out = Vec::with_capacity(ys.len());
            for y in ys {
                out.push(apply(verb, a.clone(), y.clone())?);
            }
            Ok(Value::nest(out))
        }
        (Value::Nest(xs), Value::Num(y)) if y.len() == 1 => {
            let mut out = Vec::with_capacity(xs.len());
            for x in xs {
                out.push(apply(verb, x.clone(), b.clone())?);
            }
            Ok(Value::nest(out))
        }
        _ => Err(error!(TypeMismatch; "LENGTH 1 BROADCASTS INTO NESTED")),
    }
}

fn flat(verb: Dyad, x: &[f64], y: &[f64]) -> Result<K> {
    use Dyad::*;
    match verb {
        Filter => filter(x, y),
        Delay => delay(x, y),
        Take => take(x, y),
        Zip => zip(x, y),
        Join => {
            Value::check_len(x.len() + y.len())?;
            let mut out = Vec::with_capacity(x.len() + y.len());
            out.extend_from_slice(x);
            out.extend_from_slice(y);
            Ok(Value::num(out))
        }
        verb => elementwise(verb, x, y),
    }
}

/// Concatenation when the operands are not both flat: a flat or function
/// side is promoted to a singleton wrapper and the result shares
/// references with the operands, preserving element identity. Joining a
/// function value is how a session first builds a nested array.
fn join_nested(a: &K, b: &K) -> Result<K> {
    let mut out: Vec<K> = vec![];
    for side in [a, b].iter() {
        match &***side {
            Value::Nest(items) => out.extend(items.iter().cloned()),
            _ => out.push((*side).clone()),
        }
    }
    Value::check_len(out.len())?;
    Ok(Value::nest(out))
}

/// One-pole resonant low-pass. Cutoff comes from the control array per
/// index when it is long enough, else element 0; resonance from element 1.
/// Clamps keep the leaky integrators from diverging.
fn filter(ctl: &[f64], input: &[f64]) -> Result<K> {
    let mut out = Vec::with_capacity(input.len());
    let mut b0 = 0.0;
    let mut b1 = 0.0;
    for (i, &sample) in input.iter().enumerate() {
        let mut cutoff = if ctl.len() > i {
            ctl[i]
        } else {
            ctl.first().cloned().unwrap_or(0.0)
        };
        let mut res = if ctl.len() >= 2 { ctl[1] } else { 0.0 };
        if cutoff > 0.95 {
            cutoff = 0.95;
        }
        if res > 3.98 {
            res = 3.98;
        }
        let fed = sample - res * b1;
        b0 += cutoff * (fed - b0);
        b1 += cutoff * (b0 - b1);
        out.push(b1);
    }
    Ok(Value::num(out))
}

/// Feedback comb: each output reads its own just-written history 0.4 deep.
/// A delay under one sample degenerates to a copy.
fn delay(ctl: &[f64], input: &[f64]) -> Result<K> {
    let d = ctl.first().map(|&x| x as i64).unwrap_or(0);
    if d < 1 {
        return Ok(Value::num(input.to_vec()));
    }
    let d = d as usize;
    let mut out: Vec<f64> = Vec::with_capacity(input.len());
    for (i, &sample) in input.iter().enumerate() {
        let fed = if i >= d { 0.4 * out[i - d] } else { 0.0 };
        out.push(sample + fed);
    }
    Ok(Value::num(out))
}

/// Takes n elements, cycling through the source. An empty source yields
/// zeros.
fn take(ctl: &[f64], src: &[f64]) -> Result<K> {
    let n = ctl.first().map(|&x| x as i64).unwrap_or(0).max(0) as usize;
    Value::check_len(n)?;
    if src.is_empty() {
        return Ok(Value::num(vec![0.0; n]));
    }
    Ok(Value::num((0..n).map(|i| src[i % src.len()]).collect()))
}

/// Interleaves two arrays as left/right samples.
fn zip(x: &[f64], y: &[f64]) -> Result<K> {
    let n = x.len().min(y.len());
    Value::check_len(2 * n)?;
    let mut out = Vec::with_capacity(2 * n);
    for i in 0..n {
        out.push(x[i]);
        out.push(y[i]);
    }
    Ok(Value::num(out))
}

/// Elementwise over the broadcast length `max(p,q)`, each index taken
/// modulo its operand's own length. Emptiness propagates.
fn elementwise(verb: Dyad, x: &[f64], y: &[f64]) -> Result<K> {
    use Dyad::*;
    let f: fn(f64, f64) -> f64 = match verb {
        Add => |x, y| x + y,
        Sub => |x, y| x - y,
        Mul => |x, y| x * y,
        Div => |x, y| if y == 0.0 { 0.0 } else { x / y },
        Pow => |x, y| x.abs().powf(y),
        Min => f64::min,
        Max => f64::max,
        Eq => |x, y| if x == y { 1.0 } else { 0.0 },
        Mod => |x, y| if y == 0.0 { 0.0 } else { x % y },
        Zero => |_, _| 0.0,
        Filter | Delay | Take | Join | Zip => {
            return Err(error!(InternalError; "OP NOT ELEMENTWISE; PANIC"))
        }
    };
    if x.is_empty() || y.is_empty() {
        return Ok(Value::empty());
    }
    let n = x.len().max(y.len());
    Ok(Value::num(
        (0..n).map(|i| f(x[i % x.len()], y[i % y.len()])).collect(),
    ))
}
