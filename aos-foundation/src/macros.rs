// AOS - aos-foundation
// Module: Macros
// SW-REQ-ID: AOS-CORE-MEM-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate-internal macros.

/// Emit a tracing event at the given level when the `tracing` feature is
/// enabled. Compiles to nothing otherwise.
///
/// ```ignore
/// trace_event!(debug, container = "array", capacity, "push_back on full array");
/// ```
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$level!($($arg)*);
        }
    };
}
