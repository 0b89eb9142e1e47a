// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! End-to-end scenarios across the container families.

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use aos_foundation::prelude::*;
    use aos_foundation::Error;

    aos_variant! {
        #[derive(Debug, Clone, PartialEq)]
        enum IntOrBool {
            Int(i32),
            Bool(bool),
        }
    }

    #[test]
    fn test_static_array_fill_and_drain() {
        let mut array = StaticArray::<i32, 4>::new();

        for value in 0..4 {
            array.push_back(value).unwrap();
        }
        assert!(array.is_full());
        assert_eq!(array.len(), array.capacity());

        assert_eq!(array.push_back(4), Err(Error::NO_MEMORY));
        assert_eq!(array.len(), 4);

        for expected in (0..4).rev() {
            assert_eq!(array.pop_back().unwrap(), expected);
        }
        assert_eq!(array.pop_back(), Err(Error::NOT_FOUND));
    }

    #[test]
    fn test_static_string_exact_fill() {
        let mut s = StaticString::<5>::try_from("ab").unwrap();

        s.append("cde").unwrap();
        assert_eq!(s, "abcde");

        assert!(s.append("f").is_err());
        assert_eq!(s, "abcde");
        assert_eq!(s.c_str().to_bytes_with_nul(), b"abcde\0");
    }

    #[test]
    fn test_variant_switches_alternative() {
        let mut v = Variant::<IntOrBool>::new();

        v.set_value(7i32);
        assert_eq!(*v.get_value::<i32>(), 7);

        v.set_value(true);
        assert!(*v.get_value::<bool>());
        assert_eq!(v.try_get_value::<i32>(), Err(Error::NOT_FOUND));
    }

    #[test]
    #[should_panic(expected = "is not active")]
    fn test_variant_inactive_get_is_contract_violation() {
        let mut v = Variant::<IntOrBool>::new();

        v.set_value(7i32);
        v.set_value(true);
        let _ = v.get_value::<i32>();
    }

    struct Counted {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    struct Marker {
        drops_at_construction: usize,
    }

    aos_variant! {
        enum Lifecycle {
            Counted(Counted),
            Marker(Marker),
        }
    }

    #[test]
    fn test_variant_destroys_previous_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut v = Variant::<Lifecycle>::new();

        v.set_value(Counted {
            drops: drops.clone(),
        });

        let observed = drops.clone();
        v.set_value_with(move || Marker {
            drops_at_construction: observed.get(),
        });

        assert_eq!(drops.get(), 1);
        assert_eq!(v.get_value::<Marker>().drops_at_construction, 1);

        v.reset();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_array_drops_elements_once() {
        let drops = Rc::new(Cell::new(0));

        {
            let mut array = StaticArray::<Counted, 4>::new();
            for _ in 0..4 {
                array
                    .push_back(Counted {
                        drops: drops.clone(),
                    })
                    .unwrap();
            }

            drop(array.remove(1).unwrap());
            assert_eq!(drops.get(), 1);

            assert_eq!(array.remove_if(|_| true), 3);
            assert_eq!(drops.get(), 4);

            array
                .push_back(Counted {
                    drops: drops.clone(),
                })
                .unwrap();
        }

        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_views_share_one_buffer_in_turn() {
        let mut buffer = StaticBuffer::<32>::new();

        {
            let mut words = ArrayView::<u32>::bind(&mut buffer).unwrap();
            assert_eq!(words.capacity(), 8);
            words.push_back(0x6f6c_6c65).unwrap();
        }

        {
            let mut text = StringView::bind(&mut buffer).unwrap();
            assert_eq!(text.capacity(), 31);
            text.assign("hello").unwrap();
        }

        assert_eq!(&buffer.as_bytes()[..6], b"hello\0");
    }

    #[test]
    fn test_error_provenance_survives_propagation() {
        fn lookup(ids: &Array<'_, u32>, id: u32) -> Result<usize> {
            Ok(aos_try!(ids.find(&id)))
        }

        fn outer(ids: &Array<'_, u32>) -> Result<usize> {
            Ok(aos_try!(lookup(ids, 9)))
        }

        let mut ids = StaticArray::<u32, 2>::new();
        ids.push_back(1).unwrap();

        let err = outer(&ids).unwrap_err();
        assert!(err.is(ErrorKind::NotFound));

        let mut message = config::ErrorMessage::new();
        message.convert(err);
        assert!(message.as_str().unwrap().starts_with("not found (scenarios_test.rs:"));
    }

    #[test]
    fn test_ret_with_error_from_container_result() {
        let mut array = StaticArray::<u8, 1>::new();

        let ret: RetWithError<u8> = array.pop_back().into();
        assert!(!ret.is_ok());
        assert_eq!(ret.value, 0);

        array.push_back(5).unwrap();
        let ret: RetWithError<u8> = array.pop_back().into();
        assert!(ret.is_ok());
        assert_eq!(ret.into_result(), Ok(5));
    }
}
