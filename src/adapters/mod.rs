//! Infrastructure adapters implementing domain ports.
//!
//! Adapters connect the engine to concrete similarity sources and event
//! sinks. Each implements a trait from [`crate::ports`].

pub mod in_memory_oracle;
pub mod observers;
pub mod vector_space;

pub use in_memory_oracle::InMemoryOracle;
pub use observers::{Event, RecordingObserver, TracingObserver};
pub use vector_space::VectorSpace;
