// AOS - aos-error
// Module: AOS Error Types
// SW-REQ-ID: AOS-CORE-ERR-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The [`Error`] value type and its kind enumeration.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::{codes, errno};

/// Closed set of error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum ErrorKind {
    /// Success
    #[default]
    None            = codes::NONE,
    /// Generic failure
    Failed          = codes::FAILED,
    /// Runtime error, also the kind of every errno error
    Runtime         = codes::RUNTIME,
    /// Capacity exhausted
    NoMemory        = codes::NO_MEMORY,
    /// Index outside the live range
    OutOfRange      = codes::OUT_OF_RANGE,
    /// Lookup miss or empty container
    NotFound        = codes::NOT_FOUND,
    /// Bad position, range or argument
    InvalidArgument = codes::INVALID_ARGUMENT,
    /// Operation timed out
    Timeout         = codes::TIMEOUT,
    /// Entity already exists
    AlreadyExist    = codes::ALREADY_EXIST,
    /// Operation not allowed in the current state
    WrongState      = codes::WRONG_STATE,
    /// Checksum mismatch
    InvalidChecksum = codes::INVALID_CHECKSUM,
}

impl ErrorKind {
    /// All kinds in code order.
    pub const ALL: [Self; codes::COUNT] = [
        Self::None,
        Self::Failed,
        Self::Runtime,
        Self::NoMemory,
        Self::OutOfRange,
        Self::NotFound,
        Self::InvalidArgument,
        Self::Timeout,
        Self::AlreadyExist,
        Self::WrongState,
        Self::InvalidChecksum,
    ];

    /// Returns the raw code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the kind for a raw code, if it is defined.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Returns the fixed message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        codes::message(self as usize)
    }

    /// Returns the taxonomy group of this kind.
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::None => ErrorCategory::None,
            Self::Failed | Self::Runtime => ErrorCategory::Generic,
            Self::NoMemory => ErrorCategory::Capacity,
            Self::OutOfRange | Self::NotFound | Self::InvalidArgument => ErrorCategory::Lookup,
            Self::Timeout | Self::AlreadyExist | Self::WrongState | Self::InvalidChecksum => {
                ErrorCategory::Consumer
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error taxonomy groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// No error
    None,
    /// Generic `Failed`/`Runtime` failures
    Generic,
    /// Capacity exhaustion produced by the containers
    Capacity,
    /// Index, lookup and argument errors produced by the containers
    Lookup,
    /// Kinds reserved for higher level consumers
    Consumer,
    /// Wrapped OS errno values
    System,
}

/// Source position an error was first wrapped at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Base name of the source file
    pub file: &'static str,
    /// Line number in `file`
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// AOS `Error` type
///
/// A small `Copy` value holding a kind, an optional OS errno and optional
/// provenance. Comparison looks at the errno when one is set and at the kind
/// otherwise; provenance never takes part in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Error {
    kind:     ErrorKind,
    errno:    i32,
    location: Option<Location>,
}

impl Error {
    /// Success value
    pub const NONE: Self = Self::new(ErrorKind::None);
    /// Generic failure
    pub const FAILED: Self = Self::new(ErrorKind::Failed);
    /// Runtime error
    pub const RUNTIME: Self = Self::new(ErrorKind::Runtime);
    /// Capacity exhausted
    pub const NO_MEMORY: Self = Self::new(ErrorKind::NoMemory);
    /// Index outside the live range
    pub const OUT_OF_RANGE: Self = Self::new(ErrorKind::OutOfRange);
    /// Lookup miss or empty container
    pub const NOT_FOUND: Self = Self::new(ErrorKind::NotFound);
    /// Bad position, range or argument
    pub const INVALID_ARGUMENT: Self = Self::new(ErrorKind::InvalidArgument);
    /// Operation timed out
    pub const TIMEOUT: Self = Self::new(ErrorKind::Timeout);
    /// Entity already exists
    pub const ALREADY_EXIST: Self = Self::new(ErrorKind::AlreadyExist);
    /// Operation not allowed in the current state
    pub const WRONG_STATE: Self = Self::new(ErrorKind::WrongState);
    /// Checksum mismatch
    pub const INVALID_CHECKSUM: Self = Self::new(ErrorKind::InvalidChecksum);

    /// Create a new error of the given kind without provenance.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            errno: 0,
            location: None,
        }
    }

    /// Create a new error of the given kind located at `file:line`.
    #[must_use]
    pub const fn with_location(kind: ErrorKind, file: &'static str, line: u32) -> Self {
        Self {
            kind,
            errno: 0,
            location: Some(Location { file, line }),
        }
    }

    /// Create an error from an OS errno value.
    ///
    /// `0` is success. Negative values are taken as `-errno`, the way
    /// syscall wrappers report them.
    #[must_use]
    pub const fn from_errno(errno: i32) -> Self {
        Self {
            kind: if errno == 0 {
                ErrorKind::None
            } else {
                ErrorKind::Runtime
            },
            errno: errno.saturating_abs(),
            location: None,
        }
    }

    /// Wrap `err` with provenance.
    ///
    /// If `err` already carries a location it is kept unchanged: the first
    /// wrap is the most specific one.
    #[must_use]
    pub const fn wrap(err: Self, file: &'static str, line: u32) -> Self {
        if err.location.is_some() {
            return err;
        }

        Self {
            kind: err.kind,
            errno: err.errno,
            location: Some(Location { file, line }),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the OS errno, `0` if this is not an errno error.
    #[must_use]
    pub const fn errno(&self) -> i32 {
        self.errno
    }

    /// Returns the wrap location, if any.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    /// Returns the file name of the wrap location, if any.
    #[must_use]
    pub const fn file_name(&self) -> Option<&'static str> {
        match self.location {
            Some(location) => Some(location.file),
            None => None,
        }
    }

    /// Returns the line number of the wrap location, if any.
    #[must_use]
    pub const fn line_number(&self) -> Option<u32> {
        match self.location {
            Some(location) => Some(location.line),
            None => None,
        }
    }

    /// Checks if this is the success value.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self.kind, ErrorKind::None)
    }

    /// Checks if this error has the same type as `other`.
    ///
    /// An errno error compares by errno, anything else by kind.
    #[must_use]
    pub fn is<E: Into<Self>>(&self, other: E) -> bool {
        let other = other.into();

        if self.errno != 0 {
            return self.errno == other.errno;
        }

        self.kind == other.kind
    }

    /// Returns the taxonomy group of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        if self.errno != 0 {
            ErrorCategory::System
        } else {
            self.kind.category()
        }
    }

    /// Returns the error message.
    ///
    /// The errno description wins when an errno is set and the platform
    /// knows it; otherwise the kind message is returned.
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.errno != 0 {
            let text = errno::describe(self.errno);

            if !text.is_empty() {
                return text;
            }
        }

        self.kind.message()
    }

    /// Converts a status-style error into a `Result`.
    pub const fn into_result(self) -> crate::Result<()> {
        if self.is_none() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if self.errno != 0 || other.errno != 0 {
            return self.errno == other.errno;
        }

        self.kind == other.kind
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.errno != 0 {
            self.errno.hash(state);
        } else {
            self.kind.hash(state);
        }
    }
}

// Comparing against a bare kind looks at the kind only.
impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

impl PartialEq<Error> for ErrorKind {
    fn eq(&self, other: &Error) -> bool {
        *self == other.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;

        if let Some(location) = self.location {
            write!(f, " ({location})")?;
        }

        Ok(())
    }
}

impl core::error::Error for Error {}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_errno_normalization() {
        let errno: i32 = kani::any();
        let err = Error::from_errno(errno);

        assert!(err.errno() >= 0);
        assert!(err.is_none() == (errno == 0));
    }

    #[kani::proof]
    fn verify_first_wrap_wins() {
        let first: u32 = kani::any();
        let second: u32 = kani::any();

        let err = Error::wrap(Error::NOT_FOUND, "first.rs", first);
        let err = Error::wrap(err, "second.rs", second);

        assert!(err.line_number() == Some(first));
        assert!(err.is(ErrorKind::NotFound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip_table() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(codes::COUNT as u8), None);
    }

    #[test]
    fn test_default_is_none() {
        let err = Error::default();
        assert!(err.is_none());
        assert_eq!(err.location(), None);
    }

    #[test]
    fn test_errno_normalization() {
        assert!(Error::from_errno(0).is_none());
        assert_eq!(Error::from_errno(-22).errno(), 22);
        assert_eq!(Error::from_errno(22).kind(), ErrorKind::Runtime);
        assert_eq!(Error::from_errno(i32::MIN).errno(), i32::MAX);
    }

    #[test]
    fn test_wrap_sets_location_once() {
        let first = Error::wrap(Error::NOT_FOUND, "array.rs", 10);
        let second = Error::wrap(first, "string.rs", 20);

        assert_eq!(second.file_name(), Some("array.rs"));
        assert_eq!(second.line_number(), Some(10));
        assert!(second.is(ErrorKind::NotFound));
    }

    #[test]
    fn test_is_prefers_errno() {
        let err = Error::from_errno(19);

        assert!(err.is(Error::from_errno(19)));
        assert!(!err.is(Error::from_errno(22)));
        assert!(!err.is(ErrorKind::Runtime));
    }

    #[test]
    fn test_equality_ignores_location() {
        assert_eq!(Error::with_location(ErrorKind::Timeout, "a.rs", 1), Error::TIMEOUT);
        assert_ne!(Error::TIMEOUT, Error::WRONG_STATE);
        assert_ne!(Error::from_errno(5), Error::RUNTIME);
        assert_eq!(Error::from_errno(5), ErrorKind::Runtime);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Error::NONE.category(), ErrorCategory::None);
        assert_eq!(Error::NO_MEMORY.category(), ErrorCategory::Capacity);
        assert_eq!(Error::OUT_OF_RANGE.category(), ErrorCategory::Lookup);
        assert_eq!(Error::INVALID_CHECKSUM.category(), ErrorCategory::Consumer);
        assert_eq!(Error::from_errno(1).category(), ErrorCategory::System);
    }

    #[test]
    fn test_display_with_location() {
        let err = Error::with_location(ErrorKind::NoMemory, "buffer.rs", 42);
        assert_eq!(std::format!("{err}"), "not enough memory (buffer.rs:42)");
        assert_eq!(std::format!("{}", Error::FAILED), "failed");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Error::NONE.into_result(), Ok(()));
        assert_eq!(Error::FAILED.into_result(), Err(Error::FAILED));
    }
}
