// AOS - aos-foundation
// Module: Variant - Closed tagged unions
// SW-REQ-ID: AOS-CORE-VAR-001, AOS-CORE-MEM-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tagged union over a closed set of alternatives.
//!
//! [`aos_variant!`](crate::aos_variant) declares the alternatives as an enum
//! and wires every alternative type to it through [`Alternative`].
//! [`Variant`] then holds either nothing or exactly one of them.
//!
//! # Examples
//!
//! ```
//! use aos_foundation::{aos_variant, Variant, Visitor};
//!
//! aos_variant! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub enum Setting {
//!         Number(i32),
//!         Flag(bool),
//!     }
//! }
//!
//! struct Render;
//!
//! impl Visitor<i32> for Render {
//!     type Output = &'static str;
//!     fn visit(&mut self, _: &i32) -> Self::Output { "number" }
//! }
//!
//! impl Visitor<bool> for Render {
//!     type Output = &'static str;
//!     fn visit(&mut self, _: &bool) -> Self::Output { "flag" }
//! }
//!
//! let mut setting = Variant::<Setting>::new();
//! setting.set_value(true);
//!
//! assert_eq!(setting.type_index(), Some(1));
//! assert_eq!(setting.apply_visitor(&mut Render), "flag");
//! assert!(setting.try_get_value::<i32>().is_err());
//! ```

use aos_error::{Error, Result};

/// A type that is one alternative of the enum `A`.
///
/// Implemented by [`aos_variant!`](crate::aos_variant); a type listed twice
/// in one declaration yields conflicting implementations.
pub trait Alternative<A>: Sized {
    /// Zero-based position in declaration order.
    const INDEX: usize;

    /// Wraps the value into the enum.
    fn wrap(self) -> A;

    /// Returns the value if `this` holds this alternative.
    fn get(this: &A) -> Option<&Self>;

    /// Returns the value for writing if `this` holds this alternative.
    fn get_mut(this: &mut A) -> Option<&mut Self>;
}

/// An enum generated by [`aos_variant!`](crate::aos_variant).
pub trait Alternatives {
    /// Number of alternatives.
    const COUNT: usize;

    /// Returns the index of the active alternative.
    fn index(&self) -> usize;
}

/// Operation applicable to alternative `T`.
pub trait Visitor<T> {
    /// Result of the operation, the same for every alternative.
    type Output;

    /// Applies the operation.
    fn visit(&mut self, value: &T) -> Self::Output;
}

/// An enum whose every alternative accepts visitor `V`.
pub trait Accept<V> {
    /// Result of the visit.
    type Output;

    /// Dispatches `visitor` to the active alternative.
    fn accept(&self, visitor: &mut V) -> Self::Output;
}

/// An enum whose alternatives share one interface.
pub trait HasBase {
    /// Shared interface, usually `dyn Trait`.
    type Base: ?Sized;

    /// Returns the active alternative through the shared interface.
    fn base(&self) -> &Self::Base;

    /// Returns the active alternative through the shared interface for writing.
    fn base_mut(&mut self) -> &mut Self::Base;
}

/// Holds nothing or exactly one alternative of `A`.
///
/// # Invariants
///
/// 1. At most one alternative is alive at any time
/// 2. The previous alternative is dropped before a new one is stored
#[derive(Debug, Clone, PartialEq)]
pub struct Variant<A> {
    value: Option<A>,
}

impl<A> Variant<A> {
    /// Creates an empty variant.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Replaces the active alternative with `value`.
    ///
    /// `value` is constructed by the caller before the previous alternative
    /// is dropped. Use [`set_value_with`](Self::set_value_with) to drop the
    /// previous alternative first and construct the new one afterwards.
    pub fn set_value<T: Alternative<A>>(&mut self, value: T) {
        self.value = None;
        self.value = Some(value.wrap());
    }

    /// Drops the active alternative, then stores the value built by `make`.
    pub fn set_value_with<T: Alternative<A>, F: FnOnce() -> T>(&mut self, make: F) {
        self.value = None;
        self.value = Some(make().wrap());
    }

    /// Returns the active `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not the active alternative. See
    /// [`try_get_value`](Self::try_get_value).
    #[track_caller]
    #[must_use]
    pub fn get_value<T: Alternative<A>>(&self) -> &T {
        match self.value.as_ref().and_then(T::get) {
            Some(value) => value,
            None => inactive(T::INDEX),
        }
    }

    /// Returns the active `T` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not the active alternative.
    #[track_caller]
    pub fn get_value_mut<T: Alternative<A>>(&mut self) -> &mut T {
        match self.value.as_mut().and_then(T::get_mut) {
            Some(value) => value,
            None => inactive(T::INDEX),
        }
    }

    /// Returns the active `T`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `T` is not the active alternative.
    pub fn try_get_value<T: Alternative<A>>(&self) -> Result<&T> {
        self.value.as_ref().and_then(T::get).ok_or_else(|| {
            trace_event!(debug, index = T::INDEX, "variant alternative not active");
            Error::NOT_FOUND
        })
    }

    /// Returns the active `T` for writing.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `T` is not the active alternative.
    pub fn try_get_value_mut<T: Alternative<A>>(&mut self) -> Result<&mut T> {
        self.value.as_mut().and_then(T::get_mut).ok_or(Error::NOT_FOUND)
    }

    /// Checks if `T` is the active alternative.
    #[must_use]
    pub fn is<T: Alternative<A>>(&self) -> bool {
        self.value.as_ref().and_then(T::get).is_some()
    }

    /// Checks if no alternative is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Drops the active alternative.
    pub fn reset(&mut self) {
        self.value = None;
    }

    /// Dispatches `visitor` to the active alternative.
    ///
    /// # Panics
    ///
    /// Panics on an empty variant. See
    /// [`try_apply_visitor`](Self::try_apply_visitor).
    #[track_caller]
    pub fn apply_visitor<V>(&self, visitor: &mut V) -> A::Output
    where
        A: Accept<V>,
    {
        match &self.value {
            Some(value) => value.accept(visitor),
            None => empty(),
        }
    }

    /// Dispatches `visitor` to the active alternative.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on an empty variant.
    pub fn try_apply_visitor<V>(&self, visitor: &mut V) -> Result<A::Output>
    where
        A: Accept<V>,
    {
        match &self.value {
            Some(value) => Ok(value.accept(visitor)),
            None => {
                trace_event!(debug, "visitor applied to empty variant");
                Err(Error::NOT_FOUND)
            }
        }
    }

    /// Returns the active alternative as the enum.
    #[must_use]
    pub fn value(&self) -> Option<&A> {
        self.value.as_ref()
    }

    /// Consumes the variant, returning the active alternative.
    #[must_use]
    pub fn into_inner(self) -> Option<A> {
        self.value
    }
}

impl<A: Alternatives> Variant<A> {
    /// Returns the index of the active alternative, `None` when empty.
    #[must_use]
    pub fn type_index(&self) -> Option<usize> {
        self.value.as_ref().map(Alternatives::index)
    }
}

impl<A: HasBase> Variant<A> {
    /// Returns the active alternative through the shared interface.
    ///
    /// # Panics
    ///
    /// Panics on an empty variant.
    #[track_caller]
    #[must_use]
    pub fn base(&self) -> &A::Base {
        match &self.value {
            Some(value) => value.base(),
            None => empty(),
        }
    }

    /// Returns the active alternative through the shared interface for writing.
    ///
    /// # Panics
    ///
    /// Panics on an empty variant.
    #[track_caller]
    pub fn base_mut(&mut self) -> &mut A::Base {
        match &mut self.value {
            Some(value) => value.base_mut(),
            None => empty(),
        }
    }

    /// Returns the active alternative through the shared interface.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on an empty variant.
    pub fn try_base(&self) -> Result<&A::Base> {
        self.value.as_ref().map(HasBase::base).ok_or(Error::NOT_FOUND)
    }
}

impl<A> Default for Variant<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<A> for Variant<A> {
    fn from(value: A) -> Self {
        Self { value: Some(value) }
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn inactive(index: usize) -> ! {
    panic!("variant alternative {index} is not active")
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn empty() -> ! {
    panic!("variant is empty")
}

/// Declares a closed set of alternatives for [`Variant`].
///
/// Each arm is `Name(Type)`. Every `Type` gets an [`Alternative`] impl with
/// its zero-based position as `INDEX`, and the enum accepts any visitor
/// implementing [`Visitor`] for all of its types with the same output.
///
/// Declaring the enum as `enum Name: dyn Trait { .. }` additionally
/// implements [`HasBase`] so [`Variant::base`] returns `&dyn Trait`.
///
/// ```
/// use aos_foundation::{aos_variant, Variant};
///
/// trait Named {
///     fn name(&self) -> &'static str;
/// }
///
/// struct Cpu;
/// struct Disk;
///
/// impl Named for Cpu {
///     fn name(&self) -> &'static str { "cpu" }
/// }
///
/// impl Named for Disk {
///     fn name(&self) -> &'static str { "disk" }
/// }
///
/// aos_variant! {
///     enum Resource: dyn Named {
///         Cpu(Cpu),
///         Disk(Disk),
///     }
/// }
///
/// let mut resource = Variant::<Resource>::new();
/// resource.set_value(Disk);
/// assert_eq!(resource.base().name(), "disk");
/// ```
#[macro_export]
macro_rules! aos_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : dyn $base:path {
            $($alt:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $crate::aos_variant! {
            $(#[$meta])*
            $vis enum $name {
                $($alt($ty)),+
            }
        }

        impl $crate::variant::HasBase for $name {
            type Base = dyn $base;

            fn base(&self) -> &Self::Base {
                match self {
                    $(Self::$alt(value) => value,)+
                }
            }

            fn base_mut(&mut self) -> &mut Self::Base {
                match self {
                    $(Self::$alt(value) => value,)+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($alt:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($alt($ty),)+
        }

        impl $crate::variant::Alternatives for $name {
            const COUNT: usize = [$(stringify!($alt)),+].len();

            fn index(&self) -> usize {
                match self {
                    $(Self::$alt(_) => <$ty as $crate::variant::Alternative<$name>>::INDEX,)+
                }
            }
        }

        $crate::__aos_variant_alternatives!($name; 0usize; $($alt($ty)),+);

        impl<__V, __R> $crate::variant::Accept<__V> for $name
        where
            $(__V: $crate::variant::Visitor<$ty, Output = __R>,)+
        {
            type Output = __R;

            fn accept(&self, visitor: &mut __V) -> __R {
                match self {
                    $(Self::$alt(value) => <__V as $crate::variant::Visitor<$ty>>::visit(visitor, value),)+
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __aos_variant_alternatives {
    ($name:ident; $index:expr;) => {};
    ($name:ident; $index:expr; $alt:ident($ty:ty) $(, $rest:ident($rest_ty:ty))*) => {
        impl $crate::variant::Alternative<$name> for $ty {
            const INDEX: usize = $index;

            fn wrap(self) -> $name {
                $name::$alt(self)
            }

            fn get(this: &$name) -> Option<&Self> {
                match this {
                    $name::$alt(value) => Some(value),
                    #[allow(unreachable_patterns, clippy::match_wildcard_for_single_variants)]
                    _ => None,
                }
            }

            fn get_mut(this: &mut $name) -> Option<&mut Self> {
                match this {
                    $name::$alt(value) => Some(value),
                    #[allow(unreachable_patterns, clippy::match_wildcard_for_single_variants)]
                    _ => None,
                }
            }
        }

        $crate::__aos_variant_alternatives!($name; $index + 1usize; $($rest($rest_ty)),*);
    };
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    crate::aos_variant! {
        enum Cell {
            Int(i32),
            Flag(bool),
        }
    }

    #[kani::proof]
    fn verify_variant_reset_clears() {
        let mut v = Variant::<Cell>::new();
        let int: i32 = kani::any();
        let pick: bool = kani::any();

        if pick {
            v.set_value(int);
            assert!(v.type_index() == Some(0));
            assert!(v.try_get_value::<bool>().is_err());
        } else {
            v.set_value(pick);
            assert!(v.type_index() == Some(1));
        }

        v.reset();
        assert!(v.is_empty());
        assert!(v.type_index().is_none());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    crate::aos_variant! {
        #[derive(Debug, Clone, PartialEq)]
        enum Scalar {
            Int(i32),
            Flag(bool),
            Text(&'static str),
        }
    }

    struct Describe;

    impl Visitor<i32> for Describe {
        type Output = std::string::String;
        fn visit(&mut self, value: &i32) -> Self::Output {
            std::format!("int {value}")
        }
    }

    impl Visitor<bool> for Describe {
        type Output = std::string::String;
        fn visit(&mut self, value: &bool) -> Self::Output {
            std::format!("flag {value}")
        }
    }

    impl Visitor<&'static str> for Describe {
        type Output = std::string::String;
        fn visit(&mut self, value: &&'static str) -> Self::Output {
            std::format!("text {value}")
        }
    }

    #[test]
    fn test_indices_follow_declaration_order() {
        assert_eq!(<i32 as Alternative<Scalar>>::INDEX, 0);
        assert_eq!(<bool as Alternative<Scalar>>::INDEX, 1);
        assert_eq!(<&'static str as Alternative<Scalar>>::INDEX, 2);
        assert_eq!(Scalar::COUNT, 3);
    }

    #[test]
    fn test_set_and_get() -> Result<()> {
        let mut v = Variant::<Scalar>::new();
        assert!(v.is_empty());
        assert_eq!(v.type_index(), None);

        v.set_value(12i32);
        assert_eq!(v.type_index(), Some(0));
        assert_eq!(*v.get_value::<i32>(), 12);
        assert!(v.is::<i32>());
        assert!(!v.is::<bool>());

        *v.try_get_value_mut::<i32>()? += 1;
        assert_eq!(v.try_get_value::<i32>(), Ok(&13));

        v.set_value(true);
        assert_eq!(v.type_index(), Some(1));
        assert_eq!(v.try_get_value::<i32>(), Err(Error::NOT_FOUND));
        assert_eq!(v.try_get_value::<bool>(), Ok(&true));

        Ok(())
    }

    #[test]
    fn test_visitor_dispatch() -> Result<()> {
        let mut v = Variant::<Scalar>::new();
        assert_eq!(v.try_apply_visitor(&mut Describe), Err(Error::NOT_FOUND));

        v.set_value("up");
        assert_eq!(v.apply_visitor(&mut Describe), "text up");

        v.set_value_with(|| 7i32);
        assert_eq!(v.try_apply_visitor(&mut Describe)?, "int 7");

        Ok(())
    }

    #[test]
    #[should_panic(expected = "is not active")]
    fn test_get_inactive_alternative_panics() {
        let mut v = Variant::<Scalar>::new();
        v.set_value(false);
        let _ = v.get_value::<i32>();
    }

    #[test]
    #[should_panic(expected = "variant is empty")]
    fn test_visit_empty_panics() {
        let v = Variant::<Scalar>::new();
        let _ = v.apply_visitor(&mut Describe);
    }

    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    crate::aos_variant! {
        enum Slot {
            Tracked(Tracked),
            Plain(u8),
        }
    }

    #[test]
    fn test_set_value_drops_previous_first() {
        let drops = Rc::new(Cell::new(0));
        let mut v = Variant::<Slot>::new();

        v.set_value(Tracked(drops.clone()));
        assert_eq!(drops.get(), 0);

        let observed = drops.clone();
        v.set_value_with(move || {
            assert_eq!(observed.get(), 1);
            3u8
        });
        assert_eq!(drops.get(), 1);

        v.set_value(Tracked(drops.clone()));
        v.reset();
        assert_eq!(drops.get(), 2);

        v.set_value(Tracked(drops.clone()));
        drop(v);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_set_value_builds_before_drop() {
        let drops = Rc::new(Cell::new(0));
        let mut v = Variant::<Slot>::new();

        v.set_value(Tracked(drops.clone()));
        v.set_value({
            assert_eq!(drops.get(), 0);
            Tracked(drops.clone())
        });
        assert_eq!(drops.get(), 1);
        assert_eq!(v.type_index(), Some(0));
    }

    trait Area {
        fn area(&self) -> u32;
        fn scale(&mut self, by: u32);
    }

    #[derive(Debug)]
    struct Square(u32);

    #[derive(Debug)]
    struct Rect(u32, u32);

    impl Area for Square {
        fn area(&self) -> u32 {
            self.0 * self.0
        }
        fn scale(&mut self, by: u32) {
            self.0 *= by;
        }
    }

    impl Area for Rect {
        fn area(&self) -> u32 {
            self.0 * self.1
        }
        fn scale(&mut self, by: u32) {
            self.0 *= by;
            self.1 *= by;
        }
    }

    crate::aos_variant! {
        #[derive(Debug)]
        enum Shape: dyn Area {
            Square(Square),
            Rect(Rect),
        }
    }

    #[test]
    fn test_base_interface() -> Result<()> {
        let mut v = Variant::<Shape>::new();
        assert_eq!(v.try_base().map(Area::area), Err(Error::NOT_FOUND));

        v.set_value(Rect(2, 3));
        assert_eq!(v.base().area(), 6);

        v.base_mut().scale(2);
        assert_eq!(v.try_base()?.area(), 24);

        v.set_value(Square(3));
        assert_eq!(v.base().area(), 9);
        assert_eq!(v.type_index(), Some(0));

        Ok(())
    }
}
