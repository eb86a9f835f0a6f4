//! Persistence port for the form layer.
//!
//! Session state is kept in a flat, string-keyed store where every value is
//! an independently serialized JSON string. The calculation engine never
//! touches a store; only [`Session`](crate::session::Session) does.

mod file;
mod in_memory;
mod store;

pub use file::JsonFileStore;
pub use in_memory::InMemoryStore;
pub use store::{KeyValueStore, load_json, save_json};
