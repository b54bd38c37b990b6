//! Person record.

use alloc::string::String;
use core::fmt;

/// An immutable directory record.
///
/// Lookups go by `id`; the name fields are payload the reactive core never
/// inspects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    id: u32,
    first_name: String,
    last_name: String,
}

impl Person {
    /// Creates a new person record.
    pub fn new(id: u32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns the record id.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the first name.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (#{})", self.first_name, self.last_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_person_accessors() {
        let person = Person::new(2, "John", "Doe");
        assert_eq!(person.id(), 2);
        assert_eq!(person.first_name(), "John");
        assert_eq!(person.last_name(), "Doe");
    }

    #[test]
    fn test_person_display() {
        let person = Person::new(1, "Michael", "Jordan");
        assert_eq!(person.to_string(), "Michael Jordan (#1)");
    }

    #[test]
    fn test_person_equality() {
        assert_eq!(Person::new(1, "A", "B"), Person::new(1, "A", "B"));
        assert_ne!(Person::new(1, "A", "B"), Person::new(2, "A", "B"));
    }
}
