//! Conversion of Rust values into bound arguments.
//!
//! This module provides traits and implementations for turning Rust values
//! into [`Value`]s that the rewriter substitutes into query templates.

mod primitives;
mod string;

#[cfg(feature = "with-chrono")]
mod chrono;
#[cfg(feature = "with-rust-decimal")]
mod decimal;
#[cfg(feature = "with-time")]
mod time;
#[cfg(feature = "with-uuid")]
mod uuid;

use crate::value::Value;

/// Trait for converting a Rust value into a bound argument.
pub trait ToValue {
    /// Convert to a [`Value`].
    fn to_value(&self) -> Value;
}

/// Trait for converting an ordered set of arguments.
///
/// Implemented for `()`, tuples of up to 12 [`ToValue`] elements, slices and
/// vectors.
pub trait ToParams {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Append all parameters, in order, to `out`.
    fn to_values(&self, out: &mut Vec<Value>);

    /// Collect all parameters into a new vector.
    fn collect_values(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.param_count());
        self.to_values(&mut out);
        out
    }
}

// === Option<T> - NULL handling ===

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

// === Reference support ===

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (*self).to_value()
    }
}

// === ToParams implementations ===

impl ToParams for () {
    fn param_count(&self) -> usize {
        0
    }

    fn to_values(&self, _out: &mut Vec<Value>) {}
}

impl<T: ToParams + ?Sized> ToParams for &T {
    fn param_count(&self) -> usize {
        (*self).param_count()
    }

    fn to_values(&self, out: &mut Vec<Value>) {
        (*self).to_values(out);
    }
}

impl<T: ToValue> ToParams for [T] {
    fn param_count(&self) -> usize {
        self.len()
    }

    fn to_values(&self, out: &mut Vec<Value>) {
        out.extend(self.iter().map(ToValue::to_value));
    }
}

impl<T: ToValue> ToParams for Vec<T> {
    fn param_count(&self) -> usize {
        self.len()
    }

    fn to_values(&self, out: &mut Vec<Value>) {
        self.as_slice().to_values(out);
    }
}

impl<T: ToValue, const N: usize> ToParams for [T; N] {
    fn param_count(&self) -> usize {
        N
    }

    fn to_values(&self, out: &mut Vec<Value>) {
        self.as_slice().to_values(out);
    }
}

// Tuple implementations via macro
macro_rules! impl_to_params {
    ($count:expr, $($idx:tt: $T:ident),+) => {
        impl<$($T: ToValue),+> ToParams for ($($T,)+) {
            fn param_count(&self) -> usize {
                $count
            }

            fn to_values(&self, out: &mut Vec<Value>) {
                $(out.push(self.$idx.to_value());)+
            }
        }
    };
}

impl_to_params!(1, 0: T0);
impl_to_params!(2, 0: T0, 1: T1);
impl_to_params!(3, 0: T0, 1: T1, 2: T2);
impl_to_params!(4, 0: T0, 1: T1, 2: T2, 3: T3);
impl_to_params!(5, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
impl_to_params!(6, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
impl_to_params!(7, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6);
impl_to_params!(8, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7);
impl_to_params!(9, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8);
impl_to_params!(10, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9);
impl_to_params!(11, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9, 10: T10);
impl_to_params!(12, 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9, 10: T10, 11: T11);
