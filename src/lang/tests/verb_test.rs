use crate::lang::{is_operator, Dyad, Monad};

#[test]
fn test_monad_table() {
    assert_eq!(Monad::from_char('!'), Monad::Iota);
    assert_eq!(Monad::from_char('+'), Monad::Total);
    assert_eq!(Monad::from_char('>'), Monad::Peak);
    assert_eq!(Monad::from_char('j'), Monad::Even);
    assert_eq!(Monad::from_char('k'), Monad::Odd);
    assert_eq!(Monad::from_char('s'), Monad::Sin);
    assert_eq!(Monad::from_char('~'), Monad::Reverse);
    assert_eq!(Monad::from_char('u'), Monad::Ramp);
}

#[test]
fn test_unrecognized_monad_is_identity() {
    assert_eq!(Monad::from_char('?'), Monad::Id);
    assert_eq!(Monad::from_char('w'), Monad::Id);
    assert_eq!(Monad::from_char('}'), Monad::Id);
}

#[test]
fn test_dyad_table() {
    assert_eq!(Dyad::from_char('f'), Dyad::Filter);
    assert_eq!(Dyad::from_char('y'), Dyad::Delay);
    assert_eq!(Dyad::from_char('#'), Dyad::Take);
    assert_eq!(Dyad::from_char(','), Dyad::Join);
    assert_eq!(Dyad::from_char('z'), Dyad::Zip);
    assert_eq!(Dyad::from_char('%'), Dyad::Div);
    assert_eq!(Dyad::from_char('='), Dyad::Eq);
    assert_eq!(Dyad::from_char('!'), Dyad::Mod);
}

#[test]
fn test_monadic_and_dyadic_meanings_are_independent() {
    // `!` counts monadically but is modulo dyadically
    assert_eq!(Monad::from_char('!'), Monad::Iota);
    assert_eq!(Dyad::from_char('!'), Dyad::Mod);
    // `+` reduces monadically but adds dyadically
    assert_eq!(Monad::from_char('+'), Monad::Total);
    assert_eq!(Dyad::from_char('+'), Dyad::Add);
}

#[test]
fn test_unrecognized_dyad_is_zero() {
    assert_eq!(Dyad::from_char('s'), Dyad::Zero);
    assert_eq!(Dyad::from_char('('), Dyad::Zero);
}

#[test]
fn test_operator_characters() {
    assert!(is_operator('+'));
    assert!(is_operator('#'));
    assert!(is_operator('F'));
    assert!(!is_operator('s'));
    assert!(!is_operator('1'));
    assert!(!is_operator('{'));
}
