//! JSON demo endpoint adapter.

mod client;
mod dto;

pub use client::PlaceholderClient;
