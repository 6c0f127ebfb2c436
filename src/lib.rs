pub mod cs;
pub mod error;

pub use cs::{select, structures};
pub use error::{Error, Result};
