/// Returns the version of this build, taken from the workspace package.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

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
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
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
        Sent,
        Failed(u16),
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Outcome::Sent, Outcome::Sent);
        assert_matches!(Outcome::Failed(500), Outcome::Failed(status) if *status == 500);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn mismatched_pattern() {
        assert_matches!(Outcome::Failed(400), Outcome::Sent);
    }

    #[test]
    #[should_panic(expected = "does not match predicate")]
    fn mismatched_predicate() {
        assert_matches!(Outcome::Failed(400), Outcome::Failed(status) if *status == 500);
    }
}
