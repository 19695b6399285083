use serde::{Deserialize, Serialize};

use super::{FieldKind, FieldType};
use crate::tag::{Tag, TagSettings};

/// Size assumed by [`FieldDescriptor::from_tags`] when no `SIZE` tag is set.
pub const DEFAULT_SIZE: usize = 255;

/// Description of one model field, as seen by a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field (column) name.
    pub name: String,
    /// Language-level type name, used in error messages.
    #[serde(default)]
    pub type_name: String,
    /// Primitive category.
    pub kind: FieldKind,
    /// Declared width or precision; 0 means unspecified.
    #[serde(default)]
    pub size: usize,
    /// Whether the field is the primary key.
    #[serde(default)]
    pub is_primary_key: bool,
    /// Tags attached to the field. Type resolution may rewrite these.
    #[serde(default)]
    pub tags: TagSettings,
    /// Pre-resolved SQL type that bypasses inference.
    #[serde(default)]
    pub sql_type: Option<String>,
    /// Fragment appended verbatim after the resolved type.
    #[serde(default)]
    pub additional_type: Option<String>,
}

impl FieldDescriptor {
    /// Creates a descriptor with no size, tags or overrides.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            size: 0,
            is_primary_key: false,
            tags: TagSettings::new(),
            sql_type: None,
            additional_type: None,
        }
    }

    /// Creates a descriptor for a field backed by the Rust type `T`.
    #[must_use]
    pub fn of<T: FieldType>(name: impl Into<String>) -> Self {
        Self::new(name, T::TYPE_NAME, T::KIND)
    }

    /// Creates a descriptor whose size, key status, explicit type and
    /// trailing fragment are derived from its tags.
    ///
    /// - `SIZE` sets the size (default [`DEFAULT_SIZE`]; 0 if unparsable).
    /// - `TYPE` sets the explicit SQL type.
    /// - `PRIMARY_KEY` marks the primary key.
    /// - `NOT NULL`, `UNIQUE` and `DEFAULT` make up the trailing fragment.
    #[must_use]
    pub fn from_tags(
        name: impl Into<String>,
        type_name: impl Into<String>,
        kind: FieldKind,
        tags: TagSettings,
    ) -> Self {
        let size = tags
            .get(Tag::Size)
            .map_or(DEFAULT_SIZE, |size| size.trim().parse().unwrap_or(0));

        let mut additional = format!(
            "{} {}",
            tags.get(Tag::NotNull).unwrap_or_default(),
            tags.get(Tag::Unique).unwrap_or_default()
        );
        if let Some(default) = tags.get(Tag::Default) {
            additional.push_str(" DEFAULT ");
            additional.push_str(default);
        }
        let additional = additional.trim();

        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            size,
            is_primary_key: tags.contains(Tag::PrimaryKey),
            sql_type: tags.get(Tag::Type).map(str::to_string),
            additional_type: (!additional.is_empty()).then(|| additional.to_string()),
            tags,
        }
    }

    /// Sets the declared size.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Marks the field as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Adds a flag tag.
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags = self.tags.with(tag);
        self
    }

    /// Adds a tag with a value.
    #[must_use]
    pub fn tag_value(mut self, tag: Tag, value: impl Into<String>) -> Self {
        self.tags = self.tags.with_value(tag, value);
        self
    }

    /// Sets the explicit SQL type.
    #[must_use]
    pub fn sql_type(mut self, sql_type: impl Into<String>) -> Self {
        self.sql_type = Some(sql_type.into());
        self
    }

    /// Sets the trailing SQL fragment.
    #[must_use]
    pub fn additional_type(mut self, fragment: impl Into<String>) -> Self {
        self.additional_type = Some(fragment.into());
        self
    }

    /// Returns the explicit SQL type if one is set and non-empty.
    #[must_use]
    pub fn explicit_sql_type(&self) -> Option<&str> {
        self.sql_type.as_deref().filter(|ty| !ty.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_uses_field_type() {
        let field = FieldDescriptor::of::<Option<u32>>("age");
        assert_eq!(field.name, "age");
        assert_eq!(field.kind, FieldKind::Uint32);
        assert_eq!(field.type_name, "u32");
        assert_eq!(field.size, 0);
        assert!(field.tags.is_empty());
    }

    #[test]
    fn test_from_tags_defaults() {
        let field =
            FieldDescriptor::from_tags("title", "String", FieldKind::String, TagSettings::new());
        assert_eq!(field.size, DEFAULT_SIZE);
        assert!(!field.is_primary_key);
        assert_eq!(field.sql_type, None);
        assert_eq!(field.additional_type, None);
    }

    #[test]
    fn test_from_tags_derives_everything() {
        let tags = TagSettings::parse("PRIMARY_KEY;SIZE:64;TYPE:char(64);NOT NULL;UNIQUE").unwrap();
        let field = FieldDescriptor::from_tags("code", "String", FieldKind::String, tags);
        assert_eq!(field.size, 64);
        assert!(field.is_primary_key);
        assert_eq!(field.explicit_sql_type(), Some("char(64)"));
        assert_eq!(field.additional_type.as_deref(), Some("NOT NULL UNIQUE"));
    }

    #[test]
    fn test_from_tags_default_clause() {
        let tags = TagSettings::parse("DEFAULT:'draft'").unwrap();
        let field = FieldDescriptor::from_tags("state", "String", FieldKind::String, tags);
        assert_eq!(field.additional_type.as_deref(), Some("DEFAULT 'draft'"));
    }

    #[test]
    fn test_from_tags_unparsable_size() {
        let tags = TagSettings::parse("SIZE:wide").unwrap();
        let field = FieldDescriptor::from_tags("blob", "Vec<u8>", FieldKind::Bytes, tags);
        assert_eq!(field.size, 0);
    }

    #[test]
    fn test_empty_sql_type_is_not_explicit() {
        let field = FieldDescriptor::new("id", "i64", FieldKind::Int64).sql_type("");
        assert_eq!(field.explicit_sql_type(), None);
    }

    #[test]
    fn test_deserialize_minimal() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name": "id", "kind": "int64", "is_primary_key": true}"#)
                .unwrap();
        assert_eq!(field.kind, FieldKind::Int64);
        assert!(field.is_primary_key);
        assert!(field.tags.is_empty());
        assert_eq!(field.additional_type, None);
    }
}
