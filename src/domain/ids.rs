//! Identifier types
//!
//! Domain primitives for the identities flowing through the lending core.
//! Each wraps a UUID; equality is by value.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

/// Unique identifier of a patron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatronId(Uuid);

/// Unique identifier of a library branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryBranchId(Uuid);

macro_rules! id_impl {
    ($name:ident) => {
        impl $name {
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn value(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

id_impl!(BookId);
id_impl!(PatronId);
id_impl!(LibraryBranchId);

/// Type of a book, fixed at creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookType {
    Circulating,
    Restricted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality_is_by_value() {
        let raw = Uuid::new_v4();
        assert_eq!(BookId::new(raw), BookId::new(raw));
        assert_ne!(BookId::random(), BookId::random());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = PatronId::random();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.value()));

        let back: PatronId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_book_type_serialization() {
        assert_eq!(
            serde_json::to_string(&BookType::Circulating).unwrap(),
            r#""circulating""#
        );
        assert_eq!(
            serde_json::to_string(&BookType::Restricted).unwrap(),
            r#""restricted""#
        );
    }
}
