//! Page components for folio.

mod home;

pub use home::Home;
