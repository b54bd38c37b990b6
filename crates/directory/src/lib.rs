//! Rill Directory - an in-memory person directory with reactive access.
//!
//! This crate is the example producer for the reactive core: a repository
//! over a fixed, order-stable set of `Person` records, exposed as a
//! `Stream` (`find_all`) and a `Single` (`find_by_id`). The core never
//! inspects the records; it only carries them through the chain.
//!
//! # Example
//!
//! ```rust
//! use rill_directory::{FixedPersonRepository, PersonRepository};
//!
//! let repository = FixedPersonRepository::new();
//! let person = repository.find_by_id(3).block().unwrap();
//! assert_eq!(person.map(|p| p.first_name().to_string()), Some("Jane".into()));
//! ```

#![no_std]

extern crate alloc;

mod person;
mod repository;

pub use person::Person;
pub use repository::{FixedPersonRepository, PersonRepository};
