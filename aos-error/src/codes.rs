// AOS - aos-error
// Module: AOS Error Codes
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Raw error kind codes and the fixed message table.
//!
//! The codes are the discriminants of [`ErrorKind`](crate::ErrorKind). New
//! kinds must be appended here, to [`MESSAGES`] and to the enum in the same
//! order.

/// Success
pub const NONE: u8 = 0;
/// Generic failure
pub const FAILED: u8 = 1;
/// Runtime error, also used to tag errno values
pub const RUNTIME: u8 = 2;
/// Capacity exhausted
pub const NO_MEMORY: u8 = 3;
/// Index outside the live range
pub const OUT_OF_RANGE: u8 = 4;
/// Lookup miss or empty container
pub const NOT_FOUND: u8 = 5;
/// Bad position, range or argument
pub const INVALID_ARGUMENT: u8 = 6;
/// Operation timed out
pub const TIMEOUT: u8 = 7;
/// Entity already exists
pub const ALREADY_EXIST: u8 = 8;
/// Operation not allowed in the current state
pub const WRONG_STATE: u8 = 9;
/// Checksum mismatch
pub const INVALID_CHECKSUM: u8 = 10;

/// Number of defined kinds
pub const COUNT: usize = 11;

/// Message returned for codes outside the table.
pub const UNKNOWN_MESSAGE: &str = "unknown";

/// Human readable message per kind, indexed by code.
pub const MESSAGES: [&str; COUNT] = [
    "none",
    "failed",
    "runtime error",
    "not enough memory",
    "out of range",
    "not found",
    "invalid argument",
    "timeout",
    "already exist",
    "wrong state",
    "invalid checksum",
];

/// Returns the table message for a raw kind code, or `"unknown"`.
#[must_use]
pub const fn message(code: usize) -> &'static str {
    if code < MESSAGES.len() {
        MESSAGES[code]
    } else {
        UNKNOWN_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(message(NONE as usize), "none");
        assert_eq!(message(NO_MEMORY as usize), "not enough memory");
        assert_eq!(message(INVALID_CHECKSUM as usize), "invalid checksum");
    }

    #[test]
    fn test_out_of_range_code_is_unknown() {
        assert_eq!(message(COUNT), "unknown");
        assert_eq!(message(usize::MAX), "unknown");
    }
}
