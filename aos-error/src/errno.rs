// AOS - aos-error
// Module: AOS errno Descriptions
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! OS errno descriptions.
//!
//! On hosted unix builds (`std` feature) the text comes from the platform
//! errno table. Bare-metal builds have no such table and return an empty
//! description, which makes [`Error::message`](crate::Error::message) fall
//! back to the kind message.

/// Returns the OS description of `errno`, or `""` if none is available.
#[cfg(all(feature = "std", unix))]
#[must_use]
pub fn describe(errno: i32) -> &'static str {
    if errno == 0 {
        return "";
    }

    nix::errno::Errno::from_raw(errno).desc()
}

/// Returns the OS description of `errno`, or `""` if none is available.
#[cfg(not(all(feature = "std", unix)))]
#[must_use]
pub fn describe(_errno: i32) -> &'static str {
    ""
}
