// Adapters layer: concrete person stores behind the PersonStore port.

pub mod memory;
#[cfg(feature = "mongo")]
pub mod mongo;

pub use memory::MemoryPersonStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoPersonStore;
