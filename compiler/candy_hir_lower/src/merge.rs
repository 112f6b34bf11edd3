//! Result-merging combinators (§4.5).
//!
//! Both combinators collect every error instead of stopping at the first
//! one — a body with three bad expressions must report three diagnostics.

use candy_diagnostic::LoweringError;

/// `merge(Iter<Result<T, Vec<E>>>) -> Result<Vec<T>, Vec<E>>`.
///
/// If any element is an error, returns the concatenation of every error
/// list encountered; otherwise wraps the list of successes.
pub fn merge_all<T>(
    results: impl IntoIterator<Item = Result<T, Vec<LoweringError>>>,
) -> Result<Vec<T>, Vec<LoweringError>> {
    let mut oks = Vec::new();
    let mut errs = Vec::new();
    for result in results {
        match result {
            Ok(value) if errs.is_empty() => oks.push(value),
            Ok(_) => {}
            Err(mut e) => errs.append(&mut e),
        }
    }
    if errs.is_empty() {
        Ok(oks)
    } else {
        Err(errs)
    }
}

/// `merge(Iter<Result<Vec<T>, Vec<E>>>) -> Result<Vec<T>, Vec<E>>`.
///
/// Same as [`merge_all`] but flattens successes.
pub fn merge_flatten<T>(
    results: impl IntoIterator<Item = Result<Vec<T>, Vec<LoweringError>>>,
) -> Result<Vec<T>, Vec<LoweringError>> {
    let mut oks = Vec::new();
    let mut errs = Vec::new();
    for result in results {
        match result {
            Ok(mut values) if errs.is_empty() => oks.append(&mut values),
            Ok(_) => {}
            Err(mut e) => errs.append(&mut e),
        }
    }
    if errs.is_empty() {
        Ok(oks)
    } else {
        Err(errs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use candy_diagnostic::{ErrorLocation, LoweringErrorKind};
    use candy_ir::{ResourceId, Span};

    fn err(msg: &str) -> LoweringError {
        LoweringError::new(
            LoweringErrorKind::InternalError,
            msg,
            ErrorLocation::new(ResourceId::new(0), Span::DUMMY),
        )
    }

    #[test]
    fn all_ok_collects_values() {
        let results: Vec<Result<i32, Vec<LoweringError>>> = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(merge_all(results).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn errors_are_concatenated_not_short_circuited() {
        let results: Vec<Result<i32, Vec<LoweringError>>> =
            vec![Err(vec![err("a")]), Ok(1), Err(vec![err("b")])];
        let errs = merge_all(results).unwrap_err();
        assert_eq!(errs.len(), 2);
    }

    #[test]
    fn flatten_merges_success_lists() {
        let results: Vec<Result<Vec<i32>, Vec<LoweringError>>> = vec![Ok(vec![1, 2]), Ok(vec![3])];
        assert_eq!(merge_flatten(results).unwrap(), vec![1, 2, 3]);
    }
}
