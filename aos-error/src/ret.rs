// AOS - aos-error
// Module: AOS Return Pair
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Value plus error return pair.

use crate::{Error, Result};

/// Container that holds a value and a return error.
///
/// Used where a meaningful value accompanies a failure (a default, a partial
/// count). Where no value exists on failure, [`Result`] is the return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RetWithError<T> {
    /// Returned value
    pub value: T,
    /// Returned error
    pub error: Error,
}

impl<T> RetWithError<T> {
    /// Creates a return pair.
    pub const fn new(value: T, error: Error) -> Self {
        Self { value, error }
    }

    /// Creates a successful return pair.
    pub const fn ok(value: T) -> Self {
        Self {
            value,
            error: Error::NONE,
        }
    }

    /// Checks if the pair carries no error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Splits the pair into value and error.
    pub fn into_parts(self) -> (T, Error) {
        (self.value, self.error)
    }

    /// Converts into a `Result`, dropping the value on failure.
    pub fn into_result(self) -> Result<T> {
        if self.error.is_none() {
            Ok(self.value)
        } else {
            Err(self.error)
        }
    }

    /// Maps the value, keeping the error.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RetWithError<U> {
        RetWithError {
            value: f(self.value),
            error: self.error,
        }
    }
}

impl<T> From<RetWithError<T>> for Result<T> {
    fn from(ret: RetWithError<T>) -> Self {
        ret.into_result()
    }
}

// A failed result has no value, the default stands in for it.
impl<T: Default> From<Result<T>> for RetWithError<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::new(T::default(), error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_ok_pair() {
        let ret = RetWithError::ok(5);
        assert!(ret.is_ok());
        assert_eq!(ret.into_result(), Ok(5));
    }

    #[test]
    fn test_failed_pair_keeps_value() {
        let ret = RetWithError::new(3usize, Error::TIMEOUT);
        assert!(!ret.is_ok());

        let (value, error) = ret.into_parts();
        assert_eq!(value, 3);
        assert!(error.is(ErrorKind::Timeout));
    }

    #[test]
    fn test_result_conversions() {
        let ret: RetWithError<u32> = Err(Error::NOT_FOUND).into();
        assert_eq!(ret.value, 0);
        assert_eq!(ret.error, Error::NOT_FOUND);

        let result: Result<u32> = RetWithError::ok(9).into();
        assert_eq!(result, Ok(9));
    }

    #[test]
    fn test_map() {
        let ret = RetWithError::new(2, Error::FAILED).map(|v| v * 10);
        assert_eq!(ret.value, 20);
        assert_eq!(ret.error, Error::FAILED);
    }
}
