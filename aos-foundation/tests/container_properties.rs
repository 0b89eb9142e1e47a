// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Property tests for the capacity and terminator invariants.

use aos_foundation::{Error, StaticArray, StaticString};
use proptest::prelude::*;

const CAPACITY: usize = 16;

fn filled(values: &[i32]) -> StaticArray<i32, CAPACITY> {
    StaticArray::try_from(values).unwrap()
}

proptest! {
    #[test]
    fn push_until_full_then_reject(values in prop::collection::vec(any::<i32>(), CAPACITY..CAPACITY * 2)) {
        let mut array = StaticArray::<i32, CAPACITY>::new();
        let mut pushed = 0;

        for value in &values {
            if array.is_full() {
                break;
            }
            array.push_back(*value).unwrap();
            pushed += 1;
        }

        prop_assert_eq!(pushed, CAPACITY);
        prop_assert_eq!(array.len(), array.capacity());
        prop_assert_eq!(array.push_back(0), Err(Error::NO_MEMORY));
        prop_assert_eq!(array.len(), CAPACITY);
        prop_assert_eq!(array.as_slice(), &values[..CAPACITY]);
    }

    #[test]
    fn push_then_pop_restores(values in prop::collection::vec(any::<i32>(), 0..CAPACITY), extra in any::<i32>()) {
        let mut array = filled(&values);
        let len = array.len();

        array.push_back(extra).unwrap();
        prop_assert_eq!(array.pop_back(), Ok(extra));
        prop_assert_eq!(array.len(), len);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn insert_then_remove_range_restores(
        values in prop::collection::vec(any::<i32>(), 0..CAPACITY / 2),
        inserted in prop::collection::vec(any::<i32>(), 0..CAPACITY / 2),
        pos_seed in any::<usize>(),
    ) {
        let mut array = filled(&values);
        let pos = pos_seed % (values.len() + 1);

        array.insert(pos, &inserted).unwrap();
        prop_assert_eq!(array.len(), values.len() + inserted.len());
        prop_assert_eq!(&array.as_slice()[pos..pos + inserted.len()], inserted.as_slice());

        array.remove_range(pos..pos + inserted.len()).unwrap();
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn sort_orders_ascending(values in prop::collection::vec(any::<i32>(), 0..CAPACITY)) {
        let mut array = filled(&values);
        let mut expected = values.clone();

        array.sort();
        expected.sort_unstable();

        prop_assert_eq!(array.as_slice(), expected.as_slice());
    }

    #[test]
    fn string_stays_terminated(
        steps in prop::collection::vec((0u8..3, "[a-z]{0,6}", 0usize..12), 1..24),
    ) {
        let mut s = StaticString::<8>::new();

        for (op, text, n) in &steps {
            let before = s.clone();
            let result = match op {
                0 => s.append(text.as_str()).map(|_| ()),
                1 => s.insert(n % (s.len() + 1), text.as_str()),
                _ => s.resize(*n),
            };

            if result.is_err() {
                prop_assert_eq!(&s, &before);
            }
            prop_assert!(s.len() <= s.capacity());
            prop_assert_eq!(s.c_str().to_bytes_with_nul().last(), Some(&0));
            prop_assert!(s.c_str().to_bytes().len() <= s.len());
        }
    }

    #[test]
    fn convert_matches_decimal(n in -1000i32..=1000) {
        let mut s = StaticString::<5>::new();

        s.convert(n);
        prop_assert_eq!(s.as_str().unwrap(), n.to_string());
        prop_assert_eq!(s.to_int(), Ok(n));
    }

    #[test]
    fn hex_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..8)) {
        let mut s = StaticString::<16>::new();
        let mut decoded = StaticArray::<u8, 8>::new();

        s.byte_array_to_hex(&bytes).unwrap();
        prop_assert_eq!(s.len(), bytes.len() * 2);

        s.hex_to_byte_array(&mut decoded).unwrap();
        prop_assert_eq!(decoded.as_slice(), bytes.as_slice());
    }
}
