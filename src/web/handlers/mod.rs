//! HTML template rendering handlers.

mod error;
mod home;
mod not_found;

pub use error::unavailable_page;
pub use home::home_handler;
pub use not_found::{not_found_handler, not_found_page};
