use crate::error;
use crate::lang::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Shared sample-buffer value
///
/// The one runtime datum. Handles are reference counted: cloning a `K`
/// retains, dropping releases, and a value is destroyed exactly when its
/// last handle goes. Construction is bottom-up, so nesting forms a DAG
/// and plain counting suffices. `Arc` rather than `Rc` because buffers
/// are read concurrently by the audio callback thread.
pub type K = Arc<Value>;

#[derive(Debug)]
pub enum Value {
    /// Flat array of samples. A scalar is a one-element array.
    Num(Vec<f64>),
    /// Array of shared values.
    Nest(Vec<K>),
    /// Unparsed source text of a function body. Not an array; generic
    /// array code must not touch it.
    Fun(String),
}

/// Hard cap on any single constructed array, so a stray `!99999999999`
/// comes back as OUT OF MEMORY instead of taking the session down.
const MAX_LEN: usize = 1 << 28;

static LIVE: AtomicUsize = AtomicUsize::new(0);

impl Value {
    fn wrap(value: Value) -> K {
        LIVE.fetch_add(1, Ordering::Relaxed);
        Arc::new(value)
    }

    pub fn num(samples: Vec<f64>) -> K {
        Value::wrap(Value::Num(samples))
    }

    pub fn scalar(sample: f64) -> K {
        Value::num(vec![sample])
    }

    pub fn empty() -> K {
        Value::num(vec![])
    }

    pub fn nest(items: Vec<K>) -> K {
        Value::wrap(Value::Nest(items))
    }

    pub fn fun(body: &str) -> K {
        Value::wrap(Value::Fun(body.to_string()))
    }

    /// Checks a requested element count before allocation.
    pub fn check_len(n: usize) -> Result<()> {
        if n > MAX_LEN {
            Err(error!(OutOfMemory; "ARRAY TOO LONG"))
        } else {
            Ok(())
        }
    }

    /// Element count. A function body is not an array and counts 0 here.
    pub fn len(&self) -> usize {
        match self {
            Value::Num(v) => v.len(),
            Value::Nest(v) => v.len(),
            Value::Fun(_) => 0,
        }
    }

    /// Read-only sample view, present only for flat numeric arrays. This
    /// is the playback and file-export surface.
    pub fn samples(&self) -> Option<&[f64]> {
        match self {
            Value::Num(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        match self {
            Value::Num(v) => v.len() == 1,
            _ => false,
        }
    }

    /// Count of values currently alive, for allocation balance checks.
    pub fn outstanding() -> usize {
        LIVE.load(Ordering::Relaxed)
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        LIVE.fetch_sub(1, Ordering::Relaxed);
    }
}
