// AOS - aos-error
// Module: AOS Error Handling
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! AOS error handling library
//!
//! This crate provides the error vocabulary shared by the allocation-free
//! container substrate and every component built on top of it. Nothing in
//! the substrate unwinds on a recoverable condition: each fallible operation
//! returns an [`Error`], a [`Result`], or a [`RetWithError`].
//!
//! # Error Kinds
//!
//! An [`Error`] carries either a closed [`ErrorKind`] or a nonzero OS
//! `errno`. When an `errno` is present it takes precedence for comparison
//! and for the rendered message.
//!
//! - `None`: success
//! - `NoMemory`, `OutOfRange`, `NotFound`, `InvalidArgument`: produced by
//!   the containers themselves
//! - `Timeout`, `AlreadyExist`, `WrongState`, `InvalidChecksum`: reserved
//!   for consumers
//! - `Failed`, `Runtime`: generic failures, `Runtime` also tags errno values
//!
//! # Provenance
//!
//! An error may carry the file name and line number where it was first
//! wrapped. Later wraps keep the first location.
//!
//! ```
//! use aos_error::{aos_error_wrap, Error, ErrorKind};
//!
//! let inner = aos_error_wrap!(ErrorKind::NotFound);
//! let outer = aos_error_wrap!(inner);
//!
//! assert!(outer.is(ErrorKind::NotFound));
//! assert_eq!(outer.location(), inner.location());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Fixed message table and raw kind codes
pub mod codes;
/// OS errno descriptions
pub mod errno;
/// Error and error handling types
pub mod errors;
/// Helpers for status-style and syscall-style returns
pub mod helpers;
/// Value plus error return pair
pub mod ret;

pub mod prelude;

// Wrap macros
#[macro_use]
pub mod macros;

pub use errors::{Error, ErrorCategory, ErrorKind, Location};
pub use helpers::{check_ret, file_name, status};
pub use ret::RetWithError;

/// A specialized `Result` type for AOS operations.
///
/// This type alias uses [`Error`] as the error type and is usable in
/// `no_std` builds.
pub type Result<T> = core::result::Result<T, Error>;
