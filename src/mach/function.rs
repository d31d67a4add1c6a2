use super::{Eval, Value, K};
use crate::error;
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// Required argument count, inferred by scanning the body text for the
/// highest reserved parameter name. The scan is purely textual: any
/// occurrence of the letter counts, even one meant as a verb.
pub fn arity(body: &str) -> usize {
    if body.contains('c') {
        3
    } else if body.contains('b') {
        2
    } else if body.contains('a') {
        1
    } else {
        0
    }
}

impl<'a> Eval<'a> {
    /// Calls a function body with positional arguments.
    ///
    /// Too few arguments is a soft failure: it is reported and yields an
    /// empty array rather than aborting the line. Omitted trailing
    /// arguments bind as empty arrays, so a body may read an unsupplied
    /// parameter and see zero elements. The caller's argument slots are
    /// saved around the call and restored unconditionally. The body text
    /// is re-parsed on every call, so rebinding a global changes an
    /// already-defined function's behavior on its next call.
    pub fn call(&mut self, body: &str, args: Vec<K>) -> Result<Option<K>> {
        if args.len() < arity(body) {
            self.notes
                .push(error!(ArityMismatch; "FUNCTION WANTS MORE ARGUMENTS"));
            return Ok(Some(Value::empty()));
        }
        let bound = [
            Some(args.get(0).cloned().unwrap_or_else(Value::empty)),
            Some(args.get(1).cloned().unwrap_or_else(Value::empty)),
            Some(args.get(2).cloned().unwrap_or_else(Value::empty)),
        ];
        let saved = self.env.swap_args(bound);
        let result = self.run(&mut Cursor::new(body));
        self.env.swap_args(saved);
        result
    }
}
