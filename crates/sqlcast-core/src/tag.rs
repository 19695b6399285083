//! Field tag settings.
//!
//! Tags are the free-form annotations a model attaches to a field, such as
//! `PRIMARY_KEY`, `NOT NULL` or `SIZE:255`. The set of recognized keys is
//! closed; [`TagSettings`] maps each present key to its value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A recognized tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Overrides the column name.
    #[serde(rename = "COLUMN")]
    Column,
    /// Explicit SQL type, bypassing inference.
    #[serde(rename = "TYPE")]
    Type,
    /// Column width or precision hint.
    #[serde(rename = "SIZE")]
    Size,
    /// Marks the field as the primary key.
    #[serde(rename = "PRIMARY_KEY")]
    PrimaryKey,
    /// Adds a UNIQUE constraint.
    #[serde(rename = "UNIQUE")]
    Unique,
    /// Column default expression.
    #[serde(rename = "DEFAULT")]
    Default,
    /// Numeric precision.
    #[serde(rename = "PRECISION")]
    Precision,
    /// Disallows NULL.
    #[serde(rename = "NOT NULL")]
    NotNull,
    /// Requests an auto-incrementing column.
    #[serde(rename = "AUTO_INCREMENT")]
    AutoIncrement,
    /// Requests an index on the column.
    #[serde(rename = "INDEX")]
    Index,
    /// Requests a unique index on the column.
    #[serde(rename = "UNIQUE_INDEX")]
    UniqueIndex,
    /// Inlines the fields of a nested struct.
    #[serde(rename = "EMBEDDED")]
    Embedded,
    /// Column prefix for embedded fields.
    #[serde(rename = "EMBEDDED_PREFIX")]
    EmbeddedPrefix,
    /// Names the foreign key column of an association.
    #[serde(rename = "FOREIGNKEY")]
    ForeignKey,
    /// Names the referenced column of an association.
    #[serde(rename = "ASSOCIATION_FOREIGNKEY")]
    AssociationForeignKey,
    /// Excludes the field from the schema.
    #[serde(rename = "-")]
    Ignore,
}

impl Tag {
    /// All recognized tags.
    pub const ALL: [Self; 16] = [
        Self::Column,
        Self::Type,
        Self::Size,
        Self::PrimaryKey,
        Self::Unique,
        Self::Default,
        Self::Precision,
        Self::NotNull,
        Self::AutoIncrement,
        Self::Index,
        Self::UniqueIndex,
        Self::Embedded,
        Self::EmbeddedPrefix,
        Self::ForeignKey,
        Self::AssociationForeignKey,
        Self::Ignore,
    ];

    /// Returns the canonical upper-case key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "COLUMN",
            Self::Type => "TYPE",
            Self::Size => "SIZE",
            Self::PrimaryKey => "PRIMARY_KEY",
            Self::Unique => "UNIQUE",
            Self::Default => "DEFAULT",
            Self::Precision => "PRECISION",
            Self::NotNull => "NOT NULL",
            Self::AutoIncrement => "AUTO_INCREMENT",
            Self::Index => "INDEX",
            Self::UniqueIndex => "UNIQUE_INDEX",
            Self::Embedded => "EMBEDDED",
            Self::EmbeddedPrefix => "EMBEDDED_PREFIX",
            Self::ForeignKey => "FOREIGNKEY",
            Self::AssociationForeignKey => "ASSOCIATION_FOREIGNKEY",
            Self::Ignore => "-",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parses a key case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == key)
            .ok_or(Error::UnknownTag(key))
    }
}

/// The tags attached to one field, keyed by [`Tag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSettings(BTreeMap<Tag, String>);

impl TagSettings {
    /// Creates an empty tag map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Parses a `;`-separated tag string such as `PRIMARY_KEY;SIZE:64`.
    ///
    /// The key is everything before the first `:`; bare keys take themselves
    /// as their value. Empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTag`] for a key outside the recognized set.
    pub fn parse(input: &str) -> Result<Self> {
        let mut settings = Self::new();
        for entry in input.split(';') {
            if entry.trim().is_empty() {
                continue;
            }
            let (key, value) = match entry.split_once(':') {
                Some((key, value)) => (key.parse::<Tag>()?, value.to_string()),
                None => {
                    let tag = entry.parse::<Tag>()?;
                    (tag, tag.as_str().to_string())
                }
            };
            settings.insert(key, value);
        }
        Ok(settings)
    }

    /// Adds a flag tag whose value is its own key.
    #[must_use]
    pub fn with(mut self, tag: Tag) -> Self {
        self.insert(tag, tag.as_str());
        self
    }

    /// Adds a tag with an explicit value.
    #[must_use]
    pub fn with_value(mut self, tag: Tag, value: impl Into<String>) -> Self {
        self.insert(tag, value);
        self
    }

    /// Returns true if the tag is present.
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains_key(&tag)
    }

    /// Returns the tag's value, if present.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.0.get(&tag).map(String::as_str)
    }

    /// Sets a tag, returning its previous value.
    pub fn insert(&mut self, tag: Tag, value: impl Into<String>) -> Option<String> {
        self.0.insert(tag, value.into())
    }

    /// Removes a tag, returning its value.
    pub fn remove(&mut self, tag: Tag) -> Option<String> {
        self.0.remove(&tag)
    }

    /// Number of tags present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tags are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_str() {
        assert_eq!("AUTO_INCREMENT".parse::<Tag>().unwrap(), Tag::AutoIncrement);
        assert_eq!(" not null ".parse::<Tag>().unwrap(), Tag::NotNull);
        assert_eq!("-".parse::<Tag>().unwrap(), Tag::Ignore);
        assert!(matches!(
            "SERIAL".parse::<Tag>(),
            Err(Error::UnknownTag(key)) if key == "SERIAL"
        ));
    }

    #[test]
    fn test_every_tag_round_trips_through_its_key() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_flags_and_values() {
        let tags = TagSettings::parse("primary_key;SIZE:64;DEFAULT:'a:b';;NOT NULL").unwrap();
        assert_eq!(tags.len(), 4);
        assert_eq!(tags.get(Tag::PrimaryKey), Some("PRIMARY_KEY"));
        assert_eq!(tags.get(Tag::Size), Some("64"));
        assert_eq!(tags.get(Tag::Default), Some("'a:b'"));
        assert_eq!(tags.get(Tag::NotNull), Some("NOT NULL"));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = TagSettings::parse("INDEX;COMMENT:hello").unwrap_err();
        assert!(matches!(err, Error::UnknownTag(key) if key == "COMMENT"));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut tags = TagSettings::new().with(Tag::AutoIncrement);
        assert!(tags.contains(Tag::AutoIncrement));
        assert_eq!(tags.insert(Tag::AutoIncrement, "x"), Some("AUTO_INCREMENT".to_string()));
        assert_eq!(tags.remove(Tag::AutoIncrement), Some("x".to_string()));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_serde_uses_canonical_keys() {
        let tags = TagSettings::new()
            .with(Tag::NotNull)
            .with_value(Tag::Size, "32");
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"SIZE":"32","NOT NULL":"NOT NULL"}"#);

        let back: TagSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
