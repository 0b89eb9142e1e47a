// AOS - aos-foundation
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for aos-foundation
//!
//! Re-exports the containers, the error types and the traits needed to call
//! their methods, for both std and `no_std` builds. The bounded [`String`]
//! shadows `std::string::String` when glob-imported.

pub use core::{
    convert::{TryFrom, TryInto},
    fmt::{self, Debug, Display, Write},
};

pub use aos_error::prelude::{
    aos_error_wrap, aos_try, check_ret, status, Error, ErrorCategory, ErrorKind, Result,
    RetWithError,
};

pub use crate::aos_variant;
pub use crate::array::{Array, ArrayBase, ArrayView, ItemStorage, StaticArray};
pub use crate::buffer::{Buffer, BufferView, Plain, StaticBuffer};
pub use crate::config;
pub use crate::string::{ByteStorage, StaticString, String, StringBase, StringView};
pub use crate::variant::{Accept, Alternative, Alternatives, HasBase, Variant, Visitor};

#[cfg(feature = "alloc")]
pub use crate::{array::DynamicArray, buffer::DynamicBuffer, string::DynamicString};
