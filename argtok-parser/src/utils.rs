//! Parser utilities.

/// Split an argument on the first `=`. The left part keeps any hyphens; the
/// right part is `None` when there is no `=` at all.
#[inline(always)]
pub fn split_eq(input: &str) -> (&str, Option<&str>) {
    match input.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (input, None),
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_split_on_first_equals() {
        assert_that!(split_eq("mode=a=b"), eq(("mode", Some("a=b"))));
    }

    #[test]
    fn it_should_keep_hyphens() {
        assert_that!(split_eq("--mode=fast"), eq(("--mode", Some("fast"))));
    }

    #[test]
    fn it_should_pass_through_without_equals() {
        assert_that!(split_eq("--verbose"), eq(("--verbose", None)));
    }
}
