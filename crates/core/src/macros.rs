//! Declarative `Encode` implementations for records and enumerations

/// Implement [`Encode`](crate::Encode) for a record type
///
/// Fields are listed in declaration order and become the Object's field
/// descriptors under their Rust names.
///
/// # Examples
///
/// ```
/// use jsonlite_core::{encode_record, Category, Encode};
///
/// struct Reader {
///     id: i32,
///     name: String,
/// }
///
/// encode_record!(Reader { id, name });
///
/// let reader = Reader { id: 1, name: "dock-2".into() };
/// assert_eq!(reader.to_value().category(), Category::Object);
/// ```
#[macro_export]
macro_rules! encode_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Encode for $ty {
            fn to_value(&self) -> $crate::Value<'_> {
                $crate::Value::Object(::std::vec![
                    $($crate::Field::new(::core::stringify!($field), &self.$field)),*
                ])
            }
        }
    };
}

/// Implement [`Encode`](crate::Encode) for field-less `Copy` enums
///
/// The encoded form is the discriminant, so reordering variants changes the
/// output.
///
/// # Examples
///
/// ```
/// use jsonlite_core::{encode_enum, Encode, Value};
///
/// #[derive(Clone, Copy)]
/// enum Signal {
///     Weak,
///     Strong,
/// }
///
/// encode_enum!(Signal);
///
/// assert!(matches!(Signal::Strong.to_value(), Value::Enum(1)));
/// ```
#[macro_export]
macro_rules! encode_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                fn to_value(&self) -> $crate::Value<'_> {
                    $crate::Value::Enum(*self as i64)
                }
            }
        )+
    };
}
