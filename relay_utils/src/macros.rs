/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate over the bindings of the pattern.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum Outcome {
        Delivered,
        Rejected(&'static str),
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Outcome::Delivered, Outcome::Delivered);
        assert_matches!(Outcome::Rejected("boom"), Outcome::Rejected(reason) if reason.contains("oo"));
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn panics_on_mismatch() {
        assert_matches!(Outcome::Rejected("boom"), Outcome::Delivered);
    }

    #[test]
    #[should_panic(expected = "does not match predicate")]
    fn panics_on_failed_predicate() {
        assert_matches!(Outcome::Rejected("boom"), Outcome::Rejected(reason) if reason.is_empty());
    }
}
