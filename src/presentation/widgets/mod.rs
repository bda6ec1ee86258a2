mod input;
mod popup;
mod status_bar;
mod tab_bar;

pub use input::TextInput;
pub use popup::ModalPopup;
pub use status_bar::{StatusBar, StatusLevel};
pub use tab_bar::TabBar;
