use super::{dyadic, monadic, scan, Env, Value, K};
use crate::error;
use crate::lang::{is_operator, Cursor, Dyad, Error, Monad};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// A recursive-descent reader that evaluates while it parses: two mutually
/// recursive productions walk the cursor and produce values bottom-up,
/// dispatching verbs, the scan adverb, and function calls as they are
/// encountered. Hard failures abort the line as `Err`; quiet emptiness
/// (end of input, unbound variables) flows as `Ok(None)`; soft
/// diagnostics collect in `notes` without stopping evaluation.
pub struct Eval<'a> {
    pub(super) env: &'a mut Env,
    pub(super) notes: Vec<Error>,
}

impl<'a> Eval<'a> {
    pub fn new(env: &'a mut Env) -> Eval<'a> {
        Eval {
            env,
            notes: vec![],
        }
    }

    pub fn take_notes(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.notes)
    }

    /// Evaluates every `;`-separated expression on the cursor, keeping
    /// the last result.
    pub fn run(&mut self, cursor: &mut Cursor) -> Result<Option<K>> {
        let mut last = None;
        loop {
            let result = self.expr(cursor)?;
            if result.is_some() {
                last = result;
            }
            cursor.skip_spaces();
            match cursor.peek() {
                Some(';') | Some('\n') => {
                    cursor.bump();
                }
                _ => return Ok(last),
            }
        }
    }

    /// One full expression. After the leading atom, either a function
    /// value grabs what follows as its juxtaposed argument, or the next
    /// character is consumed as a dyadic verb whose right operand is the
    /// entire rest of the expression — precedence is one flat
    /// right-to-left chain.
    pub fn expr(&mut self, cursor: &mut Cursor) -> Result<Option<K>> {
        let lhs = self.atom(cursor)?;
        cursor.skip_spaces();
        if cursor.at_terminator() {
            return Ok(lhs);
        }
        let next = match cursor.peek() {
            Some(c) => c,
            None => return Ok(lhs),
        };
        if let Some(value) = &lhs {
            if let Value::Fun(body) = &**value {
                if !is_operator(next) {
                    let body = body.clone();
                    let arg = self.expr(cursor)?;
                    return self.call(&body, arg.into_iter().collect());
                }
            }
        }
        let start = cursor.pos();
        let verb = match cursor.bump() {
            Some(c) => c,
            None => return Ok(lhs),
        };
        let rhs = self.expr(cursor)?;
        if verb.is_ascii_uppercase() {
            if let Some(global) = self.env.get(verb) {
                if let Value::Fun(body) = &*global {
                    let body = body.clone();
                    let args: Vec<K> = lhs.into_iter().chain(rhs.into_iter()).collect();
                    return self.call(&body, args);
                }
            }
        }
        match (lhs, rhs) {
            (Some(left), Some(right)) => dyadic::apply(Dyad::from_char(verb), left, right)
                .map(Some)
                .map_err(|e| e.in_column(&cursor.column_from(start))),
            _ => Ok(None),
        }
    }

    /// One atom: a parenthesized expression, a function literal, a run of
    /// numeric literals, an assignment, a variable or argument read, or a
    /// verb applied to the expression that follows it.
    fn atom(&mut self, cursor: &mut Cursor) -> Result<Option<K>> {
        cursor.skip_spaces();
        if cursor.at_terminator() {
            return Ok(None);
        }
        let start = cursor.pos();
        let c = match cursor.peek() {
            Some(c) => c,
            None => return Ok(None),
        };
        if c == '(' {
            cursor.bump();
            let inner = self.expr(cursor)?;
            cursor.skip_spaces();
            // best effort: a missing close paren consumes to end of input
            if cursor.peek() == Some(')') {
                cursor.bump();
            }
            return Ok(inner);
        }
        if c == '{' {
            return match cursor.function_body() {
                Some(body) => Ok(Some(Value::fun(body))),
                None => {
                    self.notes.push(
                        error!(SyntaxError, ..&cursor.column_from(start); "UNTERMINATED FUNCTION"),
                    );
                    Ok(None)
                }
            };
        }
        if cursor.starts_number() {
            return Ok(Some(Value::num(cursor.number_run())));
        }
        cursor.bump();
        if cursor.peek() == Some(':') {
            cursor.bump();
            let rhs = self.expr(cursor)?;
            if c.is_ascii_uppercase() {
                if let Some(value) = &rhs {
                    self.env.bind(c, value.clone());
                }
            }
            return Ok(rhs);
        }
        if c.is_ascii_uppercase() {
            // unbound reads are quiet emptiness, a normal session state
            return Ok(self.env.get(c));
        }
        if let Some(index) = Env::arg_index(c) {
            // a parameter letter reads its slot only during a call;
            // unbound it keeps its verb meaning
            if let Some(value) = self.env.arg(index) {
                return Ok(Some(value));
            }
        }
        cursor.skip_spaces();
        if cursor.peek() == Some('\\') {
            cursor.bump();
            let operand = self.expr(cursor)?;
            return match operand {
                Some(value) => scan::apply(Dyad::from_char(c), value)
                    .map(Some)
                    .map_err(|e| e.in_column(&cursor.column_from(start))),
                None => Ok(None),
            };
        }
        let operand = self.expr(cursor)?;
        match operand {
            Some(value) => monadic::apply(Monad::from_char(c), value)
                .map(Some)
                .map_err(|e| e.in_column(&cursor.column_from(start))),
            None => Ok(None),
        }
    }
}
