//! Network geolocation adapter.

mod client;
mod dto;

pub use client::GeoClient;
