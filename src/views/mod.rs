//! The views module contains the pages of the app. There is a single page that mounts
//! the status dropdown inside a small record form.

mod home;
pub use home::Home;
