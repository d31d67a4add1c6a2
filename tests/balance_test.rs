use klang::mach::{Runtime, Value};

// One test function on purpose: the live-value count is process wide, so
// nothing else may be allocating values while the balance is measured.
#[test]
fn test_reference_counts_balance() {
    let before = Value::outstanding();
    {
        let mut runtime = Runtime::new();
        for line in [
            "1 2 3",
            "s p % ! 100 10",
            "+\\!10",
            "3#1 2",
            "A:!16",
            "B:A,A",
            "1 2 z 3 4",
            "F:{a*2}",
            "F !8",
            "1 F 2",
            "F ()",         // arity soft failure
            "s {1}",        // type mismatch failure path
            "!99999999999", // allocation failure path
            "(1 2",         // unterminated paren
            "{1 2",         // unterminated function
            "{a},{b}",      // nested array of functions
            "Z",            // unbound read
        ]
        .iter()
        {
            // every event, result included, is dropped on the spot
            runtime.enter(line);
        }
        for _ in 0..100 {
            runtime.enter("C: ~ F j B , A");
        }
    }
    assert_eq!(Value::outstanding(), before);
}
