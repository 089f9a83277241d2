//! Error-accumulating validation.
//!
//! `Result` is the two-armed type: `Err` holds a failure, `Ok` holds a value,
//! `map` and `and_then` transform and chain it. What `Result` lacks is a way
//! to validate many independent inputs and report every failure at once;
//! the combinators here inspect all inputs before deciding and keep
//! errors and values in input order.

/// Combine independent results, collecting every error.
///
/// Returns `Err` with all errors in input order if any input failed,
/// otherwise `Ok` with all values in input order. An empty input is `Ok`.
pub fn accumulate<T, E, I>(results: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    accumulate_all(results.into_iter().map(|r| r.map_err(|e| vec![e])))
}

/// Like [`accumulate`], for results that already carry a list of errors.
///
/// Error lists are concatenated in input order.
pub fn accumulate_all<T, E, I>(results: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Result<T, Vec<E>>>,
{
    let (values, errors) = partition(results);
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Split results into their values and their concatenated errors.
pub fn partition<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, Vec<E>>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(errs) => errors.extend(errs),
        }
    }
    (values, errors)
}

/// Collects errors from validations of differently-typed fields.
///
/// ```
/// use swiftpack::core::validated::Accumulator;
///
/// let mut acc = Accumulator::new();
/// let a: Option<u32> = acc.check("1".parse::<u32>().map_err(|_| "a"));
/// let b: Option<u32> = acc.check("x".parse::<u32>().map_err(|_| "b"));
/// assert_eq!(a, Some(1));
/// assert_eq!(b, None);
/// assert_eq!(acc.finish(()), Err(vec!["b"]));
/// ```
#[derive(Debug)]
pub struct Accumulator<E> {
    errors: Vec<E>,
}

impl<E> Accumulator<E> {
    pub fn new() -> Self {
        Accumulator { errors: Vec::new() }
    }

    /// Record the error of a failed result; return the value of a successful one.
    pub fn check<T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Like [`check`](Self::check) for results carrying several errors.
    pub fn check_all<T>(&mut self, result: Result<T, Vec<E>>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errs) => {
                self.errors.extend(errs);
                None
            }
        }
    }

    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = E>) {
        self.errors.extend(errors);
    }

    /// `Err` with every recorded error, or `Ok(value)` if none were recorded.
    pub fn finish<T>(self, value: T) -> Result<T, Vec<E>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

impl<E> Default for Accumulator<E> {
    fn default() -> Self {
        Self::new()
    }
}
