// AOS - aos-error
// Module: AOS Error Helpers
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper functions for common error patterns.

use crate::{Error, Result};

/// Returns the base name of a source path as produced by `file!()`.
#[must_use]
pub const fn file_name(path: &'static str) -> &'static str {
    let bytes = path.as_bytes();
    let mut start = bytes.len();

    while start > 0 {
        if bytes[start - 1] == b'/' || bytes[start - 1] == b'\\' {
            break;
        }
        start -= 1;
    }

    let (_, name) = bytes.split_at(start);

    match core::str::from_utf8(name) {
        Ok(name) => name,
        Err(_) => path,
    }
}

/// Converts a status-style error into a `Result`.
pub const fn status(err: Error) -> Result<()> {
    err.into_result()
}

/// Checks a syscall-style return value.
///
/// Negative values are `-errno` and become an errno [`Error`]; anything else
/// is passed through.
pub const fn check_ret(ret: i32) -> Result<i32> {
    if ret < 0 {
        Err(Error::from_errno(ret))
    } else {
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("src/tools/array.rs"), "array.rs");
        assert_eq!(file_name("array.rs"), "array.rs");
        assert_eq!(file_name("C:\\src\\array.rs"), "array.rs");
        assert_eq!(file_name("dir/"), "");
    }

    #[test]
    fn test_check_ret() {
        assert_eq!(check_ret(5), Ok(5));

        let err = check_ret(-11).unwrap_err();
        assert_eq!(err.errno(), 11);
        assert_eq!(err.kind(), ErrorKind::Runtime);
    }

    #[test]
    fn test_status() {
        assert!(status(Error::NONE).is_ok());
        assert_eq!(status(Error::TIMEOUT), Err(Error::TIMEOUT));
    }
}
