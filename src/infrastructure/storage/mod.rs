//! Profile storage adapters.

mod profile_store;

pub use profile_store::TomlProfileStore;
