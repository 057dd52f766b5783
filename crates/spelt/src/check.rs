//! The checks behind the `require_*` macros.
//!
//! Each function compares its operands and aborts the running test case
//! with a descriptive message when they differ. `label` is the literal
//! expression text of the checked value.

use crate::{context::Context, escape::format_data, report::Location};

/// Values that may be absent, compared as strings.
pub trait MaybeStr {
    #[allow(missing_docs)]
    fn maybe_str(&self) -> Option<&str>;
}

impl MaybeStr for str {
    fn maybe_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl MaybeStr for String {
    fn maybe_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ?Sized + MaybeStr> MaybeStr for &T {
    fn maybe_str(&self) -> Option<&str> {
        (**self).maybe_str()
    }
}

impl<T: MaybeStr> MaybeStr for Option<T> {
    fn maybe_str(&self) -> Option<&str> {
        self.as_ref().and_then(MaybeStr::maybe_str)
    }
}

/// Values that may be absent, compared as byte strings.
pub trait MaybeBytes {
    #[allow(missing_docs)]
    fn maybe_bytes(&self) -> Option<&[u8]>;
}

impl MaybeBytes for [u8] {
    fn maybe_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> MaybeBytes for [u8; N] {
    fn maybe_bytes(&self) -> Option<&[u8]> {
        Some(&self[..])
    }
}

impl MaybeBytes for Vec<u8> {
    fn maybe_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl MaybeBytes for str {
    fn maybe_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl<T: ?Sized + MaybeBytes> MaybeBytes for &T {
    fn maybe_bytes(&self) -> Option<&[u8]> {
        (**self).maybe_bytes()
    }
}

impl<T: MaybeBytes> MaybeBytes for Option<T> {
    fn maybe_bytes(&self) -> Option<&[u8]> {
        self.as_ref().and_then(MaybeBytes::maybe_bytes)
    }
}

/// References that may be absent, compared by address.
pub trait MaybePtr {
    #[allow(missing_docs)]
    fn maybe_ptr(&self) -> Option<*const ()>;
}

impl<T: ?Sized> MaybePtr for &T {
    fn maybe_ptr(&self) -> Option<*const ()> {
        Some(*self as *const T as *const ())
    }
}

impl<T: ?Sized> MaybePtr for Option<&T> {
    fn maybe_ptr(&self) -> Option<*const ()> {
        self.map(|r| r as *const T as *const ())
    }
}

impl<T> MaybePtr for *const T {
    fn maybe_ptr(&self) -> Option<*const ()> {
        if self.is_null() {
            None
        } else {
            Some(*self as *const ())
        }
    }
}

#[allow(missing_docs)]
pub fn require_true(ctx: &mut Context<'_>, location: &Location, label: &str, value: bool) {
    if !value {
        ctx.abort(location, format_args!("{} is not true", label));
    }
}

#[allow(missing_docs)]
pub fn require_false(ctx: &mut Context<'_>, location: &Location, label: &str, value: bool) {
    if value {
        ctx.abort(location, format_args!("{} is not false", label));
    }
}

macro_rules! impl_require_number_eq {
    ($( $name:ident => $t:ty, $fmt:literal; )*) => {$(
        #[allow(missing_docs)]
        #[allow(clippy::float_cmp)]
        pub fn $name(ctx: &mut Context<'_>, location: &Location, label: &str, value: $t, expected: $t) {
            if value != expected {
                ctx.abort(
                    location,
                    format_args!(
                        concat!("{} is equal to ", $fmt, " but should be equal to ", $fmt),
                        label, value, expected
                    ),
                );
            }
        }
    )*};
}

impl_require_number_eq! {
    require_int_eq => i64, "{}";
    require_uint_eq => u64, "{}";
    require_float_eq => f32, "{:?}";
    require_double_eq => f64, "{:?}";
}

#[allow(missing_docs)]
pub fn require_bool_eq(
    ctx: &mut Context<'_>,
    location: &Location,
    label: &str,
    value: bool,
    expected: bool,
) {
    if value != expected {
        ctx.abort(
            location,
            format_args!("{} is {} but should be {}", label, value, expected),
        );
    }
}

#[allow(missing_docs)]
pub fn require_str_eq<V, E>(
    ctx: &mut Context<'_>,
    location: &Location,
    label: &str,
    value: &V,
    expected: &E,
) where
    V: ?Sized + MaybeStr,
    E: ?Sized + MaybeStr,
{
    match (value.maybe_str(), expected.maybe_str()) {
        (Some(value), Some(expected)) => {
            if value != expected {
                ctx.abort(
                    location,
                    format_args!(
                        "{} is the string \"{}\" but should be the string \"{}\"",
                        label, value, expected
                    ),
                );
            }
        }
        (None, Some(expected)) => ctx.abort(
            location,
            format_args!("{} is null but should be the string \"{}\"", label, expected),
        ),
        (Some(value), None) => ctx.abort(
            location,
            format_args!("{} is the string \"{}\" but should be null", label, value),
        ),
        (None, None) => (),
    }
}

#[allow(missing_docs)]
pub fn require_mem_eq<V, E>(
    ctx: &mut Context<'_>,
    location: &Location,
    label: &str,
    value: &V,
    expected: &E,
) where
    V: ?Sized + MaybeBytes,
    E: ?Sized + MaybeBytes,
{
    match (value.maybe_bytes(), expected.maybe_bytes()) {
        (Some(value), Some(expected)) => {
            if value.len() != expected.len() {
                ctx.abort(
                    location,
                    format_args!(
                        "{} is {} bytes long but should be {} bytes long",
                        label,
                        value.len(),
                        expected.len()
                    ),
                );
            }
            if value != expected {
                ctx.abort(
                    location,
                    format_args!(
                        "{} contains \"{}\" but should contain \"{}\"",
                        label,
                        format_data(value),
                        format_data(expected)
                    ),
                );
            }
        }
        (None, Some(expected)) => ctx.abort(
            location,
            format_args!(
                "{} is null but should be the string \"{}\"",
                label,
                format_data(expected)
            ),
        ),
        (Some(value), None) => ctx.abort(
            location,
            format_args!(
                "{} contains \"{}\" but should be null",
                label,
                format_data(value)
            ),
        ),
        (None, None) => (),
    }
}

#[allow(missing_docs)]
pub fn require_ptr_eq<V, E>(
    ctx: &mut Context<'_>,
    location: &Location,
    label: &str,
    value: &V,
    expected: &E,
) where
    V: ?Sized + MaybePtr,
    E: ?Sized + MaybePtr,
{
    match (value.maybe_ptr(), expected.maybe_ptr()) {
        (Some(value), Some(expected)) => {
            if value != expected {
                ctx.abort(
                    location,
                    format_args!(
                        "{} is equal to {:p} but should be equal to {:p}",
                        label, value, expected
                    ),
                );
            }
        }
        (None, Some(expected)) => ctx.abort(
            location,
            format_args!("{} is null but should be equal to {:p}", label, expected),
        ),
        (Some(value), None) => ctx.abort(
            location,
            format_args!("{} is equal to {:p} but should be null", label, value),
        ),
        (None, None) => (),
    }
}

#[allow(missing_docs)]
pub fn require_null(ctx: &mut Context<'_>, location: &Location, label: &str, is_null: bool) {
    if !is_null {
        ctx.abort(location, format_args!("{} is not null", label));
    }
}

#[allow(missing_docs)]
pub fn require_not_null(ctx: &mut Context<'_>, location: &Location, label: &str, is_null: bool) {
    if is_null {
        ctx.abort(location, format_args!("{} is null", label));
    }
}
