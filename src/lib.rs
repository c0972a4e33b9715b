//! CRUD data access for the animal shelter collection in MongoDB.
//!
//! One access object, [`AnimalShelter`], bound to a single database and
//! collection, with four pass-through operations: [`create`], [`read`],
//! [`update`] and [`delete`].
//!
//! [`create`]: AnimalShelter::create
//! [`read`]: AnimalShelter::read
//! [`update`]: AnimalShelter::update
//! [`delete`]: AnimalShelter::delete

pub mod config;
pub mod error;
mod mongo;
pub mod results;
mod shelter;

pub use config::ShelterConfig;
pub use error::{Error, Result};
pub use results::{DeleteSummary, UpdateSummary, WriteOutcome};
pub use shelter::AnimalShelter;
