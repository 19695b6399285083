//! Classification of Rust types into field kinds.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::FieldKind;

/// A Rust type that can back a model field.
///
/// `Option<T>` classifies as `T`: nullability is expressed through tags,
/// not through the kind.
pub trait FieldType {
    /// Category of the type.
    const KIND: FieldKind;
    /// Name reported in error messages.
    const TYPE_NAME: &'static str;
}

macro_rules! impl_field_type {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::$kind;
                const TYPE_NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

impl_field_type! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Isize,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Usize,
    f32 => Float32,
    f64 => Float64,
    String => String,
    NaiveDateTime => Timestamp,
}

impl FieldType for Vec<u8> {
    const KIND: FieldKind = FieldKind::Bytes;
    const TYPE_NAME: &'static str = "Vec<u8>";
}

impl FieldType for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Timestamp;
    const TYPE_NAME: &'static str = "DateTime<Utc>";
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;
    const TYPE_NAME: &'static str = T::TYPE_NAME;
}
