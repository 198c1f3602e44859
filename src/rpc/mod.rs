pub mod constants;
pub mod error;
pub mod params;

pub use constants::*;
pub use error::*;
pub use params::*;
