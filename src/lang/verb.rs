// A verb is a single character; its monadic and dyadic meanings are
// independent. Unrecognized characters map to the permissive defaults
// (`Monad::Id` passes through, `Dyad::Zero` yields zeros) so stray
// characters at the prompt stay harmless.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Monad {
    /// `!` count 0..n from the first element
    Iota,
    /// `+` sum of all elements
    Total,
    /// `>` maximum absolute value
    Peak,
    /// `j` even-indexed samples of an interleaved pair
    Even,
    /// `k` odd-indexed samples of an interleaved pair
    Odd,
    /// `s` sine
    Sin,
    /// `t` tangent
    Tan,
    /// `h` hyperbolic tangent
    Tanh,
    /// `a` absolute value
    Abs,
    /// `q` square root of the absolute value
    Sqrt,
    /// `l` natural log of the absolute value
    Log,
    /// `e` exponential
    Exp,
    /// `_` floor
    Floor,
    /// `r` uniform noise in [-1,1), input ignored
    Noise,
    /// `p` multiply by pi
    Pi,
    /// `~` reverse
    Reverse,
    /// `x` exponential decay envelope
    Decay,
    /// `d` soft clip
    Clip,
    /// `v` 2-bit quantizer
    Crush,
    /// `m` hashed-index bit noise
    Grit,
    /// `b` six-oscillator square metal timbre
    Metal,
    /// `u` ten-sample attack ramp
    Ramp,
    /// anything else: identity
    Id,
}

impl Monad {
    pub fn from_char(c: char) -> Monad {
        use Monad::*;
        match c {
            '!' => Iota,
            '+' => Total,
            '>' => Peak,
            'j' => Even,
            'k' => Odd,
            's' => Sin,
            't' => Tan,
            'h' => Tanh,
            'a' => Abs,
            'q' => Sqrt,
            'l' => Log,
            'e' => Exp,
            '_' => Floor,
            'r' => Noise,
            'p' => Pi,
            '~' => Reverse,
            'x' => Decay,
            'd' => Clip,
            'v' => Crush,
            'm' => Grit,
            'b' => Metal,
            'u' => Ramp,
            _ => Id,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Dyad {
    /// `f` resonant low-pass filter, controls on the left
    Filter,
    /// `y` feedback delay, delay length on the left
    Delay,
    /// `#` take n elements, cycling
    Take,
    /// `,` concatenation
    Join,
    /// `z` stereo interleave
    Zip,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `%` protected divide, x/0 is 0
    Div,
    /// `^` pow(|x|, y)
    Pow,
    /// `&` minimum
    Min,
    /// `|` maximum
    Max,
    /// `=` equality as 0/1
    Eq,
    /// `!` floating modulo, x mod 0 is 0
    Mod,
    /// anything else: zeros
    Zero,
}

impl Dyad {
    pub fn from_char(c: char) -> Dyad {
        use Dyad::*;
        match c {
            'f' => Filter,
            'y' => Delay,
            '#' => Take,
            ',' => Join,
            'z' => Zip,
            '+' => Add,
            '-' => Sub,
            '*' => Mul,
            '%' => Div,
            '^' => Pow,
            '&' => Min,
            '|' => Max,
            '=' => Eq,
            '!' => Mod,
            _ => Zero,
        }
    }
}

/// Characters that stop a function value from grabbing what follows as
/// its juxtaposed argument. Dyadic verbs bind instead, and an uppercase
/// letter may itself be a dyadic function application.
pub fn is_operator(c: char) -> bool {
    c.is_ascii_uppercase() || Dyad::from_char(c) != Dyad::Zero
}
