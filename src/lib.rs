pub mod arguments;
pub mod bumper;
pub mod error;
pub mod version;
