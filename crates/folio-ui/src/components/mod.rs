//! Layout components

mod global_style;
mod layout;
mod max_width_wrapper;

pub use global_style::*;
pub use layout::*;
pub use max_width_wrapper::*;
