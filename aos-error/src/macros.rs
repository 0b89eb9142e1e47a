// AOS - aos-error
// Module: AOS Error Macros
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros attaching source provenance to errors.

/// Wrap an error (or an [`ErrorKind`](crate::ErrorKind)) with the current
/// file name and line number.
///
/// An error that is already wrapped keeps its original location.
///
/// # Examples
///
/// ```
/// use aos_error::{aos_error_wrap, ErrorKind};
///
/// let err = aos_error_wrap!(ErrorKind::InvalidArgument);
/// assert!(err.file_name().is_some());
/// ```
#[macro_export]
macro_rules! aos_error_wrap {
    ($err:expr) => {
        $crate::Error::wrap(
            $crate::Error::from($err),
            $crate::file_name(file!()),
            line!(),
        )
    };
}

/// Unwrap a `Result`, returning early with a wrapped error on failure.
///
/// # Examples
///
/// ```
/// use aos_error::{aos_try, Error, Result};
///
/// fn lookup(found: bool) -> Result<u32> {
///     let value = aos_try!(if found { Ok(7) } else { Err(Error::NOT_FOUND) });
///     Ok(value)
/// }
///
/// assert_eq!(lookup(true), Ok(7));
/// assert!(lookup(false).unwrap_err().location().is_some());
/// ```
#[macro_export]
macro_rules! aos_try {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => return Err($crate::aos_error_wrap!(err)),
        }
    };
}
