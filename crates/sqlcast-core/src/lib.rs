//! # sqlcast-core
//!
//! Engine-independent building blocks for translating model fields into
//! DDL fragments.
//!
//! This crate provides:
//! - [`FieldDescriptor`], the dialect-facing view of a model field, with its
//!   [`FieldKind`] and [`TagSettings`]
//! - the [`Dialect`] trait that each database engine implements
//! - the [`Catalog`] trait, the collaborator used for live catalog lookups
//!
//! ## Describing fields
//!
//! ```rust
//! use sqlcast_core::{FieldDescriptor, FieldKind, Tag, TagSettings};
//!
//! // From a Rust type
//! let id = FieldDescriptor::of::<i64>("id").primary_key();
//! assert_eq!(id.kind, FieldKind::Int64);
//!
//! // From a tag string
//! let tags = TagSettings::parse("SIZE:100;NOT NULL").unwrap();
//! let title = FieldDescriptor::from_tags("title", "String", FieldKind::String, tags);
//! assert_eq!(title.size, 100);
//! assert!(title.tags.contains(Tag::NotNull));
//! assert_eq!(title.additional_type.as_deref(), Some("NOT NULL"));
//! ```

pub mod catalog;
pub mod dialect;
pub mod error;
pub mod field;
pub mod tag;

pub use catalog::Catalog;
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use field::{FieldDescriptor, FieldKind, FieldType};
pub use tag::{Tag, TagSettings};
