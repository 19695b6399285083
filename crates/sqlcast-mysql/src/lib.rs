//! # sqlcast-mysql
//!
//! MySQL dialect for `sqlcast-core`.
//!
//! # How MySQL differs from other dialects
//!
//! - **Identifier quoting**: MySQL quotes identifiers with backticks
//!   (`` ` ``). See [MySQL identifiers].
//! - **[Identifier length]**: constraint names are limited to 64
//!   characters. Longer foreign key names are shortened to a readable
//!   prefix of the referenced table plus a SHA-1 digest of the full name.
//! - **[AUTO_INCREMENT]**: only one column per table may auto-increment,
//!   and it must be indexed. A stray `AUTO_INCREMENT` tag on a non-key
//!   column is dropped instead of producing invalid DDL.
//! - **Unsigned integers**: MySQL has native `UNSIGNED` integer types, so
//!   unsigned Rust integers map to `int unsigned` / `bigint unsigned`.
//! - **[TIMESTAMP]**: nullability of `TIMESTAMP` columns depends on server
//!   settings, so the dialect always spells out `NULL` unless the field is
//!   tagged `NOT NULL`.
//! - **Large objects**: text and bytes longer than 65531 fall back to
//!   `longtext` / `longblob`.
//! - **`FROM DUAL`**: MySQL accepts `DUAL` as a dummy table.
//!
//! [MySQL identifiers]: https://dev.mysql.com/doc/refman/8.0/en/identifiers.html
//! [Identifier length]: https://dev.mysql.com/doc/refman/8.0/en/identifier-length.html
//! [AUTO_INCREMENT]: https://dev.mysql.com/doc/refman/8.0/en/example-auto-increment.html
//! [TIMESTAMP]: https://dev.mysql.com/doc/refman/8.0/en/timestamp-initialization.html
//!
//! ## Example
//!
//! ```rust
//! use sqlcast_core::{Dialect, FieldDescriptor, Tag};
//! use sqlcast_mysql::MysqlDialect;
//!
//! let dialect = MysqlDialect::new();
//!
//! let mut id = FieldDescriptor::of::<u64>("id").primary_key();
//! assert_eq!(dialect.data_type_of(&mut id).unwrap(), "bigint unsigned AUTO_INCREMENT");
//! assert!(id.tags.contains(Tag::AutoIncrement));
//!
//! let mut email = FieldDescriptor::of::<String>("email")
//!     .size(255)
//!     .additional_type("NOT NULL UNIQUE");
//! assert_eq!(dialect.data_type_of(&mut email).unwrap(), "varchar(255) NOT NULL UNIQUE");
//!
//! assert_eq!(
//!     dialect.build_foreign_key_name("posts", "author_id", "users"),
//!     "posts_author_id_users_foreign"
//! );
//! ```

mod dialect;
pub mod naming;
mod pool;
pub mod types;

pub use dialect::{MysqlDialect, CURRENT_DATABASE_SQL, HAS_FOREIGN_KEY_SQL};
pub use pool::PoolCatalog;
