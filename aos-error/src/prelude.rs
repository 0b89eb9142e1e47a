// AOS - aos-error
// Module: AOS Error Prelude
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for aos-error
//!
//! Re-exports the types most crates in the workspace import, for both std
//! and `no_std` builds.

pub use core::{
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{
    aos_error_wrap, aos_try, check_ret, status, Error, ErrorCategory, ErrorKind, Location, Result,
    RetWithError,
};
