//! SQL dialect support.
//!
//! Each database engine gets its own [`Dialect`] implementation that owns the
//! engine's column type table and naming rules. Conventions shared by every
//! engine live in [`naming`].

pub mod naming;

use crate::error::Result;
use crate::field::FieldDescriptor;

/// Trait for dialect-specific schema translation.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }

    /// Maximum number of characters the engine accepts in an identifier.
    fn max_identifier_length(&self) -> usize {
        64
    }

    /// Returns the column type for a field, ready to embed in DDL.
    ///
    /// Implementations may rewrite `field.tags` to record decisions that
    /// later DDL emission depends on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType) if
    /// the engine has no column type for the field.
    fn data_type_of(&self, field: &mut FieldDescriptor) -> Result<String>;

    /// Returns the name of the foreign key constraint from `table_name.field`
    /// to `dest`.
    fn build_foreign_key_name(&self, table_name: &str, field: &str, dest: &str) -> String {
        naming::foreign_key_name(table_name, field, dest)
    }

    /// Returns the clause selecting from a dummy table, if the engine has one.
    fn select_from_dummy_table(&self) -> &'static str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct StubDialect;

    impl Dialect for StubDialect {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn data_type_of(&self, field: &mut FieldDescriptor) -> Result<String> {
            Err(Error::UnsupportedType {
                type_name: field.type_name.clone(),
                kind: field.kind,
                dialect: self.name(),
            })
        }
    }

    #[test]
    fn test_defaults() {
        let dialect = StubDialect;
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.quote_identifier("users"), "\"users\"");
        assert_eq!(dialect.max_identifier_length(), 64);
        assert_eq!(dialect.select_from_dummy_table(), "");
        assert_eq!(
            dialect.build_foreign_key_name("posts", "author_id", "users"),
            "posts_author_id_users_foreign"
        );
    }
}
