//! Page components for OpenSolo.

mod landing;

pub use landing::Landing;
