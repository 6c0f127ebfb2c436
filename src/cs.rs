pub mod select;
pub mod structures;

// Re-export all modules
pub use select::*;
pub use structures::*;
