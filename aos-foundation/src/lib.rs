// AOS - aos-foundation
// SW-REQ-ID: AOS-CORE-MEM-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Allocation-free container substrate for the AOS core.
//!
//! Every container in this crate has a capacity fixed at compile time or at
//! construction time and never grows. Every fallible operation returns an
//! [`Error`] instead of panicking; the few unchecked accessors
//! (`Index`, [`Variant::get_value`], [`Variant::apply_visitor`],
//! [`StringBase::convert`]) each have a checked counterpart.
//!
//! - [`buffer`]: type-unaware byte regions in three ownership modes
//! - [`array`]: bounded typed sequences over any slot storage
//! - [`string`]: NUL-terminated byte strings on the same discipline
//! - [`variant`]: closed tagged unions declared with [`aos_variant!`]
//! - [`config`]: compile-time capacities per platform profile
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (implies `alloc` and `regex`)
//! - `alloc`: Enables the heap-owning `Dynamic*` containers
//! - `regex`: Enables [`StringBase::search`]
//! - `tracing`: Emits structured events on capacity and lookup failures
//! - `embedded-small` / `embedded-medium`: Platform capacity profiles
//!
//! # Examples
//!
//! ```
//! use aos_foundation::{Array, StaticArray, StaticString};
//!
//! fn collect(ids: &mut Array<'_, u32>) -> aos_foundation::Result<()> {
//!     ids.push_back(7)?;
//!     ids.push_back(3)?;
//!     ids.sort();
//!     Ok(())
//! }
//!
//! let mut ids = StaticArray::<u32, 4>::new();
//! collect(&mut ids)?;
//! assert_eq!(ids.as_slice(), &[3, 7]);
//!
//! let mut name = StaticString::<8>::try_from("node")?;
//! name.append("-1")?;
//! assert_eq!(name, "node-1");
//! # Ok::<(), aos_foundation::Error>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(clippy::pedantic)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Crate-internal macros, must come before the modules using them
#[macro_use]
mod macros;

/// Type-unaware byte regions
pub mod buffer;
/// Bounded typed sequences
pub mod array;
/// NUL-terminated bounded strings
pub mod string;
/// Closed tagged unions
pub mod variant;
/// Compile-time capacities
pub mod config;

pub mod prelude;

/// Structured tracing helpers
#[cfg(feature = "tracing")]
pub mod tracing;

pub use aos_error::{aos_error_wrap, Error, ErrorKind, Result, RetWithError};
pub use array::{Array, ArrayBase, ArrayView, ItemStorage, StaticArray};
#[cfg(feature = "alloc")]
pub use array::DynamicArray;
pub use buffer::{Buffer, BufferView, Plain, StaticBuffer};
#[cfg(feature = "alloc")]
pub use buffer::DynamicBuffer;
pub use string::{ByteStorage, StaticString, String, StringBase, StringView, TerminatedBytes};
#[cfg(feature = "alloc")]
pub use string::DynamicString;
pub use variant::{Accept, Alternative, Alternatives, HasBase, Variant, Visitor};
