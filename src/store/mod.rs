//! Injected store over the shared CRM collections

mod memory;
mod seed;
mod traits;

pub use memory::InMemoryStore;
pub use traits::{CrmStore, StoreError};

#[cfg(test)]
pub use traits::MockCrmStore;
