//! Scalar payload types
//!
//! - [`Number`]: the fixed set of numeric primitives the encoder accepts
//! - [`Timestamp`]: a wall-clock date-time together with its offset kind

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};
use std::fmt;

/// Numeric primitive
///
/// Only these widths are encodable. `u64`, `usize`, `isize` and the 128-bit
/// integers are deliberately absent and classify as Unsupported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 32-bit IEEE-754 float
    F32(f32),
    /// 64-bit IEEE-754 float
    F64(f64),
}

impl Number {
    /// Check if this is a floating point number
    pub fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{}", n),
            Number::I16(n) => write!(f, "{}", n),
            Number::I32(n) => write!(f, "{}", n),
            Number::I64(n) => write!(f, "{}", n),
            Number::U8(n) => write!(f, "{}", n),
            Number::U16(n) => write!(f, "{}", n),
            Number::U32(n) => write!(f, "{}", n),
            Number::F32(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }
        )+
    };
}

number_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    f32 => F32,
    f64 => F64,
}

/// How a timestamp relates to UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtcOffset {
    /// The wall clock is UTC, rendered as `Z`
    Utc,
    /// The wall clock is at a known offset, rendered as `+hh:mm` / `-hh:mm`
    Fixed(FixedOffset),
    /// No zone information, nothing is rendered
    Unspecified,
}

/// Date-time as it appears on the wall clock of its offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Local date and time, including sub-second precision
    pub wall_clock: NaiveDateTime,
    /// Offset kind of `wall_clock`
    pub offset: UtcOffset,
}

impl Timestamp {
    /// Create a timestamp without zone information
    pub fn unspecified(wall_clock: NaiveDateTime) -> Self {
        Timestamp {
            wall_clock,
            offset: UtcOffset::Unspecified,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp {
            wall_clock: dt.naive_utc(),
            offset: UtcOffset::Utc,
        }
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp {
            wall_clock: dt.naive_local(),
            offset: UtcOffset::Fixed(*dt.offset()),
        }
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Timestamp {
            wall_clock: dt.naive_local(),
            offset: UtcOffset::Fixed(dt.offset().fix()),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::unspecified(dt)
    }
}
