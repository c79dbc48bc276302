use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(op: &'static str, index: usize, size: usize) -> Error {
        Error(ErrorKind::OutOfRange { op, index, size }.into())
    }

    pub fn allocation_failed(requested: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::AllocationFailed { requested, source }.into())
    }

    /// Returns `true` if this error reports a position outside the logical range
    /// of a container.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{op}: index {index} is out of range for size {size}")]
    OutOfRange {
        op: &'static str,
        index: usize,
        size: usize,
    },

    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let e = Error::out_of_range("at", 10, 3);
        assert!(e.is_out_of_range());
        assert_eq!(e.to_string(), "at: index 10 is out of range for size 3");
    }

    #[test]
    fn test_allocation_failed_keeps_source() {
        let source = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let e = Error::allocation_failed(usize::MAX, source);
        assert!(!e.is_out_of_range());
        assert!(std::error::Error::source(&e).is_some());
        match e.into_kind() {
            ErrorKind::AllocationFailed { requested, .. } => assert_eq!(requested, usize::MAX),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
