//! # klang
//!
//! A terse array language for making sound. Single-character verbs operate
//! on arrays of samples; expressions are typed at a prompt, evaluated
//! immediately, and routed to live audio voices or WAV files.
//!
//! Begin by opening a terminal and running the executable.
//! ```text
//! klang
//! > A: d f 0.1 2 \ s p % ! 8000 100
//! > \p A
//! ```
//!
//! `! 8000` counts to 8000, `%` divides by 100, `p` scales by pi, `s` takes
//! the sine, `f` filters, `d` clips. `A:` binds the result and `\p A`
//! plays it.

pub mod lang;
pub mod mach;
pub mod term;
