//! The `Encode` capability
//!
//! Every type the encoder accepts implements [`Encode`], producing a shallow
//! [`Value`] view of itself. Records list their fields explicitly (usually via
//! [`encode_record!`](crate::encode_record)) and enumerations report their
//! ordinal (via [`encode_enum!`](crate::encode_enum)).

use crate::types::{Number, Timestamp};
use crate::value::Value;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, Utc};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value that can describe itself to the encoder
///
/// Implementations must be cheap: the writer calls `to_value` exactly once per
/// visited value and borrows children straight out of `self`.
///
/// # Examples
///
/// ```
/// use jsonlite_core::{Category, Encode, Field, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Encode for Point {
///     fn to_value(&self) -> Value<'_> {
///         Value::Object(vec![Field::new("X", &self.x), Field::new("Y", &self.y)])
///     }
/// }
///
/// assert_eq!(Point { x: 1, y: 2 }.to_value().category(), Category::Object);
/// ```
pub trait Encode {
    /// Describe one level of this value
    fn to_value(&self) -> Value<'_>;
}

// ============================================================================
// Scalars
// ============================================================================

impl Encode for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Encode for str {
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }
}

impl Encode for String {
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self.as_str()))
    }
}

impl Encode for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self.as_ref()))
    }
}

impl Encode for char {
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Owned(self.to_string()))
    }
}

macro_rules! encode_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encode for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )+
    };
}

encode_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

macro_rules! encode_unsupported {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encode for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::unsupported::<$ty>()
                }
            }
        )+
    };
}

// Outside the fixed numeric list.
encode_unsupported!(u64, usize, isize, i128, u128);

// ============================================================================
// Date-times and time spans
// ============================================================================

impl Encode for DateTime<Utc> {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(Timestamp::from(*self))
    }
}

impl Encode for DateTime<FixedOffset> {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(Timestamp::from(*self))
    }
}

impl Encode for DateTime<Local> {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(Timestamp::from(*self))
    }
}

impl Encode for NaiveDateTime {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(Timestamp::from(*self))
    }
}

impl Encode for Timestamp {
    fn to_value(&self) -> Value<'_> {
        Value::DateTime(*self)
    }
}

impl Encode for Duration {
    fn to_value(&self) -> Value<'_> {
        Value::TimeSpan(*self)
    }
}

impl Encode for std::time::Duration {
    fn to_value(&self) -> Value<'_> {
        match Duration::from_std(*self) {
            Ok(span) => Value::TimeSpan(span),
            Err(_) => Value::unsupported::<std::time::Duration>(),
        }
    }
}

// ============================================================================
// Wrappers
// ============================================================================

impl<T: Encode> Encode for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

// ============================================================================
// Sequences
// ============================================================================

impl<T: Encode> Encode for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::Sequence(self.iter().map(|item| item as &dyn Encode).collect())
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Sequence(self.iter().map(|item| item as &dyn Encode).collect())
    }
}

// ============================================================================
// Associative containers
// ============================================================================

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Encode, v as &dyn Encode))
                .collect(),
        )
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Encode, v as &dyn Encode))
                .collect(),
        )
    }
}

impl<K: Encode, V: Encode, S> Encode for IndexMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Encode, v as &dyn Encode))
                .collect(),
        )
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl Encode for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if n.is_u64() {
                    // Only reachable above i64::MAX
                    Value::unsupported::<u64>()
                } else if let Some(f) = n.as_f64() {
                    Value::Number(Number::F64(f))
                } else {
                    Value::unsupported::<serde_json::Number>()
                }
            }
            serde_json::Value::String(s) => Value::String(Cow::Borrowed(s.as_str())),
            serde_json::Value::Array(items) => items.as_slice().to_value(),
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k as &dyn Encode, v as &dyn Encode))
                    .collect(),
            ),
        }
    }
}
