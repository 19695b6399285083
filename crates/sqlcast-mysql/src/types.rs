//! MySQL column type resolution.

use sqlcast_core::{Error, FieldDescriptor, FieldKind, Result, Tag};
use tracing::debug;

/// Sizes at or above this fall back to `longtext` / `longblob`.
///
/// Matches the row-size budget MySQL allows for a length-prefixed,
/// indexable column.
pub const MAX_VARCHAR_SIZE: usize = 65532;

/// Resolves the column type for `field`.
///
/// An explicit SQL type is returned as-is; otherwise the type is inferred
/// from the field's kind. Integer fields that end up auto-incrementing get a
/// canonical `AUTO_INCREMENT` tag, and a stray `AUTO_INCREMENT` tag on a
/// non-key column is removed.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the kind has no MySQL column type.
pub fn resolve(field: &mut FieldDescriptor) -> Result<String> {
    let explicit = field.explicit_sql_type().map(str::to_string);
    let sql_type = match explicit {
        Some(explicit) => explicit,
        None => {
            normalize_auto_increment(field);
            infer(field).ok_or_else(|| Error::UnsupportedType {
                type_name: field.type_name.clone(),
                kind: field.kind,
                dialect: "mysql",
            })?
        }
    };

    match field.additional_type.as_deref() {
        Some(additional) if !additional.trim().is_empty() => {
            Ok(format!("{sql_type} {additional}"))
        }
        _ => Ok(sql_type),
    }
}

/// MySQL allows only one auto increment column per table, and it must be a
/// key column.
fn normalize_auto_increment(field: &mut FieldDescriptor) {
    if field.tags.contains(Tag::AutoIncrement)
        && !field.tags.contains(Tag::Index)
        && !field.is_primary_key
    {
        debug!(field = %field.name, "dropping AUTO_INCREMENT from non-key column");
        field.tags.remove(Tag::AutoIncrement);
    }
}

fn infer(field: &mut FieldDescriptor) -> Option<String> {
    let sql_type = match field.kind {
        FieldKind::Bool => "boolean".to_string(),
        FieldKind::Int8 | FieldKind::Int16 | FieldKind::Int32 | FieldKind::Isize => {
            integer(field, "int")
        }
        FieldKind::Uint8 | FieldKind::Uint16 | FieldKind::Uint32 | FieldKind::Usize => {
            integer(field, "int unsigned")
        }
        FieldKind::Int64 => integer(field, "bigint"),
        FieldKind::Uint64 => integer(field, "bigint unsigned"),
        FieldKind::Float32 | FieldKind::Float64 => "double".to_string(),
        FieldKind::String => sized(field.size, "varchar", "longtext"),
        FieldKind::Timestamp => {
            if field.tags.contains(Tag::NotNull) {
                "timestamp".to_string()
            } else {
                "timestamp NULL".to_string()
            }
        }
        FieldKind::Bytes => sized(field.size, "varbinary", "longblob"),
        FieldKind::Struct | FieldKind::Other => return None,
    };
    Some(sql_type)
}

/// Primary keys and tagged columns auto-increment, whatever their width.
fn integer(field: &mut FieldDescriptor, base: &str) -> String {
    if field.is_primary_key || field.tags.contains(Tag::AutoIncrement) {
        field
            .tags
            .insert(Tag::AutoIncrement, Tag::AutoIncrement.as_str());
        format!("{base} AUTO_INCREMENT")
    } else {
        base.to_string()
    }
}

fn sized(size: usize, bounded: &str, unbounded: &str) -> String {
    if size > 0 && size < MAX_VARCHAR_SIZE {
        format!("{bounded}({size})")
    } else {
        unbounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_bounds() {
        assert_eq!(sized(1, "varchar", "longtext"), "varchar(1)");
        assert_eq!(sized(MAX_VARCHAR_SIZE - 1, "varchar", "longtext"), "varchar(65531)");
        assert_eq!(sized(MAX_VARCHAR_SIZE, "varchar", "longtext"), "longtext");
        assert_eq!(sized(0, "varbinary", "longblob"), "longblob");
    }

    #[test]
    fn test_normalize_keeps_indexed_tag() {
        let mut field = FieldDescriptor::new("seq", "i32", FieldKind::Int32)
            .tag(Tag::AutoIncrement)
            .tag(Tag::Index);
        normalize_auto_increment(&mut field);
        assert!(field.tags.contains(Tag::AutoIncrement));
    }

    #[test]
    fn test_normalize_keeps_primary_key_tag() {
        let mut field = FieldDescriptor::new("id", "i32", FieldKind::Int32)
            .primary_key()
            .tag(Tag::AutoIncrement);
        normalize_auto_increment(&mut field);
        assert!(field.tags.contains(Tag::AutoIncrement));
    }

    #[test]
    fn test_normalize_drops_stray_tag() {
        let mut field = FieldDescriptor::new("n", "i32", FieldKind::Int32)
            .tag(Tag::AutoIncrement)
            .tag(Tag::UniqueIndex);
        normalize_auto_increment(&mut field);
        assert!(!field.tags.contains(Tag::AutoIncrement));
    }

    #[test]
    fn test_integer_rewrites_tag_to_canonical_value() {
        let mut field = FieldDescriptor::new("seq", "u64", FieldKind::Uint64)
            .tag_value(Tag::AutoIncrement, "yes")
            .tag(Tag::Index);
        assert_eq!(integer(&mut field, "bigint unsigned"), "bigint unsigned AUTO_INCREMENT");
        assert_eq!(field.tags.get(Tag::AutoIncrement), Some("AUTO_INCREMENT"));
    }
}
