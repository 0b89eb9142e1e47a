// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tests for no_std and no_alloc compatibility

#![no_std]
#![allow(clippy::unwrap_used)]

use aos_foundation::prelude::*;

#[cfg(test)]
mod tests {
    use core::mem;

    use super::*;

    static GREETING: StaticString<8> = StaticString::new();

    #[test]
    fn test_static_containers_need_no_allocation() {
        let mut array: StaticArray<u16, 4> = StaticArray::new();
        array.push_back(1).unwrap();
        array.push_back(2).unwrap();

        let mut s: StaticString<16> = StaticString::new();
        write!(s, "{}+{}", array[0], array[1]).unwrap();

        assert_eq!(s, "1+2");
        assert!(GREETING.is_empty());
    }

    #[test]
    fn test_static_sizes_are_inline() {
        assert!(mem::size_of::<StaticString<15>>() >= 16);
        assert_eq!(mem::size_of::<StaticBuffer<32>>(), 32);
        assert_eq!(mem::align_of::<StaticBuffer<1>>(), 16);
    }

    #[test]
    fn test_view_over_stack_bytes() {
        let mut raw = [0u8; 12];
        let mut buffer = BufferView::new(&mut raw);
        let mut words = ArrayView::<u8>::bind(&mut buffer).unwrap();

        words.extend_from_slice(&[3, 1, 2]).unwrap();
        words.sort();

        assert_eq!(words.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_config_capacities() {
        let id = config::NodeId::try_from("node0").unwrap();

        assert_eq!(id.capacity(), config::NODE_ID_LEN);
        assert!(config::check_limit(config::MAX_NUM_NODES, config::MAX_NUM_NODES).is_ok());
    }
}
