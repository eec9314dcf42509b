pub mod directory;
pub mod probes;

pub use crate::domain::model::{Age, Person, PersonInput, StoredPerson};
pub use crate::domain::ports::{PersonStore, StoreResult};
pub use crate::utils::error::Result;
pub use directory::PersonDirectory;
