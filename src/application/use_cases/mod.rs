//! Use case implementations.

mod locate_city_use_case;

pub use locate_city_use_case::LocateCityUseCase;
