pub mod address;
pub mod error;
pub mod fix;

pub use address::Address;
pub use error::{Error, Result};
pub use fix::CoordinateFix;
