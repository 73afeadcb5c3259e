// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Print Module** - *Pretty Printing with Attitude*
//!
//! Contains implementations of the Display trait
//! and an additional `Print` trait which wraps it to provide
//! `myobj.print()` for any object that implements it.
use std::fmt::{self, Display, Formatter};

use num_complex::Complex;

use crate::enums::array::Array;
use crate::structs::dense_array::DenseArray;
use crate::traits::type_unions::Float;

pub(crate) const MAX_PREVIEW: usize = 50;

/// # Print
///
/// Provides a more convenient way to activate `Display`
/// for arrays via `myarr.print()`,
/// avoiding the need to write `println!("{}", myarr);`
pub trait Print {
    #[inline]
    fn print(&self)
    where
        Self: Display,
    {
        println!("{}", self);
    }
}

impl<T: Display> Print for T where T: Display {}

/// Cell rendering for a single element.
pub trait PreviewValue {
    fn preview(&self) -> String;
}

macro_rules! impl_preview_to_string {
    ($($t:ty),*) => {
        $(
            impl PreviewValue for $t {
                #[inline]
                fn preview(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_preview_to_string!(bool, i8, i16, i32, i64, u8, u16, u32, u64);

impl PreviewValue for f32 {
    fn preview(&self) -> String {
        format_float(*self)
    }
}

impl PreviewValue for f64 {
    fn preview(&self) -> String {
        format_float(*self)
    }
}

impl<T: Float> PreviewValue for Complex<T> {
    fn preview(&self) -> String {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        format!("{}{}{}i", format_float(self.re), sign, format_float(self.im.abs()))
    }
}

/// Formats floating point numbers:
/// - Keeps up to 6 decimal digits
/// - Trims trailing zeroes and unnecessary decimal point
#[inline]
pub(crate) fn format_float<T: Float>(v: T) -> String {
    let s = format!("{:.6}", v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

pub(crate) fn print_rule(f: &mut Formatter<'_>, idx_width: usize, col_width: usize) -> fmt::Result {
    writeln!(f, "+{:-<iw$}+{:-<cw$}+", "", "", iw = idx_width + 2, cw = col_width + 2)
}

pub(crate) fn print_row(
    f: &mut Formatter<'_>,
    idx: &str,
    value: &str,
    idx_width: usize,
    col_width: usize,
) -> fmt::Result {
    writeln!(f, "| {idx:^iw$} | {value:^cw$} |", iw = idx_width, cw = col_width)
}

impl<T: PreviewValue> Display for DenseArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.len();
        let shown = n.min(MAX_PREVIEW);
        let cells: Vec<String> = self.iter().take(shown).map(PreviewValue::preview).collect();

        let idx_width = shown.saturating_sub(1).to_string().len().max(3);
        let col_width = cells.iter().map(|s| s.chars().count()).max().unwrap_or(0).max(5);

        writeln!(f, "DenseArray {} [{n} values]", self.shape)?;
        print_rule(f, idx_width, col_width)?;
        print_row(f, "idx", "value", idx_width, col_width)?;
        print_rule(f, idx_width, col_width)?;
        for (i, cell) in cells.iter().enumerate() {
            print_row(f, &i.to_string(), cell, idx_width, col_width)?;
        }
        if n > shown {
            print_row(f, "…", "…", idx_width, col_width)?;
        }
        print_rule(f, idx_width, col_width)
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind())?;
        match self {
            Array::Bool(a) => a.fmt(f),
            #[cfg(feature = "extended_numeric_types")]
            Array::Int8(a) => a.fmt(f),
            #[cfg(feature = "extended_numeric_types")]
            Array::Int16(a) => a.fmt(f),
            Array::Int32(a) => a.fmt(f),
            Array::Int64(a) => a.fmt(f),
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt8(a) => a.fmt(f),
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt16(a) => a.fmt(f),
            Array::UInt32(a) => a.fmt(f),
            Array::UInt64(a) => a.fmt(f),
            Array::Float32(a) => a.fmt(f),
            Array::Float64(a) => a.fmt(f),
            Array::Complex32(a) => a.fmt(f),
            Array::Complex64(a) => a.fmt(f),
        }
    }
}
