use thiserror::Error;

/// Errors that can occur when configuring timer reporting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The process-wide report destination used by
    /// [`GlobalStreamReporter`](crate::GlobalStreamReporter) can only be set once.
    #[error("the global report destination has already been set")]
    DestinationAlreadySet,
}

/// A specialized `Result` type for stopwatch operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn destination_already_set_message() {
        let result: Result<()> = Err(Error::DestinationAlreadySet);

        let error = result.unwrap_err();
        assert_eq!(
            error.to_string(),
            "the global report destination has already been set"
        );
    }
}
