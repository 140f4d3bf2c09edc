//! Page components for Folio.

mod home;
mod intro;
mod projects;

pub use home::Home;
pub use intro::Intro;
pub use projects::Projects;
