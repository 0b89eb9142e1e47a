//! Test `no_std` compatibility for aos-error
//!
//! This file validates that the aos-error crate works correctly in `no_std` environments.

// For testing in a no_std environment
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unnecessary_literal_unwrap)]
mod tests {
    use aos_error::{status, Error, ErrorKind, Result};

    const fn checked(value: u32) -> Result<u32> {
        if value > 10 {
            return Err(Error::OUT_OF_RANGE);
        }
        Ok(value)
    }

    #[test]
    fn test_const_construction() {
        const ERR: Error = Error::with_location(ErrorKind::Timeout, "timer.rs", 7);
        assert_eq!(ERR.kind(), ErrorKind::Timeout);
        assert_eq!(ERR.line_number(), Some(7));
    }

    #[test]
    fn test_result_in_const_context() {
        assert_eq!(checked(4).unwrap(), 4);
        assert!(checked(11).unwrap_err().is(ErrorKind::OutOfRange));
    }

    #[test]
    fn test_status_conversion() {
        assert!(status(Error::NONE).is_ok());
        assert!(status(Error::INVALID_CHECKSUM).is_err());
    }

    #[test]
    fn test_kind_code_round_trip() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(200), None);
    }
}
