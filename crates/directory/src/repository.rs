//! Reactive repository over the directory.
//!
//! The repository is an external collaborator of the reactive core: it
//! produces a `Stream` of records on demand and derives the by-id lookup
//! from it. Each call returns a fresh chain; nothing is read until the
//! caller subscribes or blocks.

use alloc::vec::Vec;

use rill_reactive::{Single, Stream};

use crate::person::Person;

/// Reactive access to person records.
pub trait PersonRepository {
    /// Returns all records as a finite, order-stable stream.
    fn find_all(&self) -> Stream<Person>;

    /// Returns the record with the given id, or an empty `Single` when no
    /// record matches.
    fn find_by_id(&self, id: u32) -> Single<Person>;
}

/// Repository over a fixed in-memory record set.
pub struct FixedPersonRepository {
    people: Vec<Person>,
}

impl FixedPersonRepository {
    /// Creates the repository with the stock four-record dataset.
    pub fn new() -> Self {
        Self::with_people(alloc::vec![
            Person::new(1, "Michael", "Jordan"),
            Person::new(2, "John", "Doe"),
            Person::new(3, "Jane", "Doe"),
            Person::new(4, "Alice", "Doe"),
        ])
    }

    /// Creates a repository over the given records, preserving their order.
    pub fn with_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true if the repository holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for FixedPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRepository for FixedPersonRepository {
    fn find_all(&self) -> Stream<Person> {
        Stream::from_vec(self.people.clone())
    }

    fn find_by_id(&self, id: u32) -> Single<Person> {
        self.find_all().filter(move |person| person.id() == id).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn test_stock_dataset() {
        let repository = FixedPersonRepository::new();
        assert_eq!(repository.len(), 4);
        assert!(!repository.is_empty());
    }

    #[test]
    fn test_find_all_order_stable() {
        let repository = FixedPersonRepository::new();

        let ids = Rc::new(RefCell::new(Vec::new()));
        let ids_clone = ids.clone();
        repository
            .find_all()
            .subscribe(move |person| ids_clone.borrow_mut().push(person.id()));

        assert_eq!(*ids.borrow(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_find_by_id_found() {
        let repository = FixedPersonRepository::new();
        let person = repository.find_by_id(3).block().unwrap();
        assert_eq!(person, Some(Person::new(3, "Jane", "Doe")));
    }

    #[test]
    fn test_find_by_id_absent_is_empty_not_error() {
        let repository = FixedPersonRepository::new();
        assert_eq!(repository.find_by_id(0).block(), Ok(None));
    }

    #[test]
    fn test_empty_repository() {
        let repository = FixedPersonRepository::with_people(vec![]);
        assert!(repository.is_empty());
        assert_eq!(repository.find_all().collect_to_list().block(), Ok(Some(vec![])));
    }
}
