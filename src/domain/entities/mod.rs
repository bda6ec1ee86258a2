//! Domain entity definitions.

mod contact;
mod location;
mod post;
mod remote_user;
mod sensor;

pub use contact::{Contact, ContactGroup, sample_directory};
pub use location::{Coordinates, Place};
pub use post::Post;
pub use remote_user::RemoteUser;
pub use sensor::SensorReading;
