// AOS - aos-foundation
// Module: Config - Compile-time capacities
// SW-REQ-ID: AOS-CORE-CFG-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Compile-time capacities for the AOS core containers.
//!
//! String lengths are fixed by the protocol and live in [`lengths`]. Item
//! counts depend on the target and are selected by feature flags:
//!
//! - `embedded-small`: MCU targets, one node and a handful of instances
//! - `embedded-medium`: embedded Linux
//! - Default: desktop/server
//!
//! The sized string and array aliases below are what consumers store.
//!
//! # Usage
//!
//! ```rust
//! use aos_foundation::config::{self, ServiceId};
//!
//! let id = ServiceId::try_from("service-1")?;
//! assert!(id.capacity() == config::SERVICE_ID_LEN);
//! config::check_limit(3, config::MAX_NUM_INSTANCES)?;
//! # Ok::<(), aos_foundation::Error>(())
//! ```

use aos_error::{Error, Result};

use crate::array::StaticArray;
use crate::string::StaticString;

/// Protocol string lengths (not platform-dependent)
pub mod lengths {
    /// Provider ID length
    pub const PROVIDER_ID_LEN: usize = 40;

    /// Service ID length
    pub const SERVICE_ID_LEN: usize = 40;

    /// Subject ID length
    pub const SUBJECT_ID_LEN: usize = 40;

    /// System ID length
    pub const SYSTEM_ID_LEN: usize = 40;

    /// Layer ID length
    pub const LAYER_ID_LEN: usize = 40;

    /// Instance ID length
    pub const INSTANCE_ID_LEN: usize = 40;

    /// Unit model length
    pub const UNIT_MODEL_LEN: usize = 40;

    /// Node ID length
    pub const NODE_ID_LEN: usize = 64;

    /// Node type length
    pub const NODE_TYPE_LEN: usize = 64;

    /// Layer digest length
    pub const LAYER_DIGEST_LEN: usize = 128;

    /// URL length
    pub const URL_LEN: usize = 256;

    /// File path length
    pub const FILE_PATH_LEN: usize = 256;

    /// Vendor version length
    pub const VENDOR_VERSION_LEN: usize = 20;

    /// Description length
    pub const DESCRIPTION_LEN: usize = 200;

    /// Error message length
    pub const ERROR_MESSAGE_LEN: usize = 256;

    /// Partition name length
    pub const PARTITION_NAME_LEN: usize = 64;

    /// Partition type length
    pub const PARTITION_TYPES_LEN: usize = 32;

    /// Instance state checksum length
    pub const STATE_CHECKSUM_LEN: usize = 28;

    /// File transfer chunk size in bytes
    pub const FILE_CHUNK_SIZE: usize = 1024;

    /// SHA-256 digest size in bytes
    pub const SHA256_SIZE: usize = 32;

    /// SHA-512 digest size in bytes
    pub const SHA512_SIZE: usize = 64;
}

/// Platform profile for microcontrollers
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Maximum subjects per node
    pub const MAX_SUBJECTS_SIZE: usize = 2;

    /// Maximum services
    pub const MAX_NUM_SERVICES: usize = 4;

    /// Maximum layers
    pub const MAX_NUM_LAYERS: usize = 4;

    /// Maximum instances
    pub const MAX_NUM_INSTANCES: usize = 4;

    /// Maximum partitions per node
    pub const MAX_NUM_PARTITIONS: usize = 2;

    /// Maximum types per partition
    pub const MAX_NUM_PARTITION_TYPES: usize = 2;

    /// Maximum nodes in the unit
    pub const MAX_NUM_NODES: usize = 1;
}

/// Platform profile for embedded Linux
/// Note: embedded-small takes priority if both features are enabled
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Maximum subjects per node
    pub const MAX_SUBJECTS_SIZE: usize = 4;

    /// Maximum services
    pub const MAX_NUM_SERVICES: usize = 8;

    /// Maximum layers
    pub const MAX_NUM_LAYERS: usize = 8;

    /// Maximum instances
    pub const MAX_NUM_INSTANCES: usize = 8;

    /// Maximum partitions per node
    pub const MAX_NUM_PARTITIONS: usize = 4;

    /// Maximum types per partition
    pub const MAX_NUM_PARTITION_TYPES: usize = 4;

    /// Maximum nodes in the unit
    pub const MAX_NUM_NODES: usize = 2;
}

/// Platform profile for desktop/server (default)
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Maximum subjects per node
    pub const MAX_SUBJECTS_SIZE: usize = 4;

    /// Maximum services
    pub const MAX_NUM_SERVICES: usize = 16;

    /// Maximum layers
    pub const MAX_NUM_LAYERS: usize = 16;

    /// Maximum instances
    pub const MAX_NUM_INSTANCES: usize = 16;

    /// Maximum partitions per node
    pub const MAX_NUM_PARTITIONS: usize = 4;

    /// Maximum types per partition
    pub const MAX_NUM_PARTITION_TYPES: usize = 4;

    /// Maximum nodes in the unit
    pub const MAX_NUM_NODES: usize = 4;
}

pub use lengths::*;
pub use platform::*;

/// Provider identifier
pub type ProviderId = StaticString<PROVIDER_ID_LEN>;
/// Service identifier
pub type ServiceId = StaticString<SERVICE_ID_LEN>;
/// Subject identifier
pub type SubjectId = StaticString<SUBJECT_ID_LEN>;
/// System identifier
pub type SystemId = StaticString<SYSTEM_ID_LEN>;
/// Layer identifier
pub type LayerId = StaticString<LAYER_ID_LEN>;
/// Instance identifier
pub type InstanceId = StaticString<INSTANCE_ID_LEN>;
/// Unit model name
pub type UnitModel = StaticString<UNIT_MODEL_LEN>;
/// Node identifier
pub type NodeId = StaticString<NODE_ID_LEN>;
/// Node type name
pub type NodeType = StaticString<NODE_TYPE_LEN>;
/// Layer digest
pub type LayerDigest = StaticString<LAYER_DIGEST_LEN>;
/// URL
pub type Url = StaticString<URL_LEN>;
/// File path
pub type FilePath = StaticString<FILE_PATH_LEN>;
/// Vendor version
pub type VendorVersion = StaticString<VENDOR_VERSION_LEN>;
/// Free-form description
pub type Description = StaticString<DESCRIPTION_LEN>;
/// Rendered error message
pub type ErrorMessage = StaticString<ERROR_MESSAGE_LEN>;
/// Partition name
pub type PartitionName = StaticString<PARTITION_NAME_LEN>;
/// Partition type name
pub type PartitionType = StaticString<PARTITION_TYPES_LEN>;
/// Instance state checksum
pub type StateChecksum = StaticString<STATE_CHECKSUM_LEN>;

/// SHA-256 digest bytes
pub type Sha256Digest = StaticArray<u8, SHA256_SIZE>;
/// SHA-512 digest bytes
pub type Sha512Digest = StaticArray<u8, SHA512_SIZE>;
/// Subjects of one node
pub type SubjectIdList = StaticArray<SubjectId, MAX_SUBJECTS_SIZE>;
/// Instances of the unit
pub type InstanceIdList = StaticArray<InstanceId, MAX_NUM_INSTANCES>;
/// Nodes of the unit
pub type NodeIdList = StaticArray<NodeId, MAX_NUM_NODES>;
/// Types of one partition
pub type PartitionTypeList = StaticArray<PartitionType, MAX_NUM_PARTITION_TYPES>;

/// Validates `count` against `limit`.
///
/// # Errors
///
/// Returns `NoMemory` if `count` exceeds `limit`.
#[inline]
pub const fn check_limit(count: usize, limit: usize) -> Result<()> {
    if count > limit {
        Err(Error::NO_MEMORY)
    } else {
        Ok(())
    }
}

/// Compile-time assertions to ensure capacities are usable
mod assertions {
    use super::*;

    const _: () = assert!(ERROR_MESSAGE_LEN >= 64, "Error message too short for a location");
    const _: () = assert!(SHA512_SIZE == 2 * SHA256_SIZE, "Digest sizes out of line");
    const _: () = assert!(FILE_PATH_LEN >= PARTITION_NAME_LEN, "Paths shorter than names");

    const _: () = assert!(MAX_NUM_NODES > 0, "At least one node required");
    const _: () = assert!(MAX_NUM_INSTANCES >= MAX_NUM_NODES, "Fewer instances than nodes");
    const _: () = assert!(MAX_NUM_SERVICES <= MAX_NUM_INSTANCES, "Services exceed instances");
}
