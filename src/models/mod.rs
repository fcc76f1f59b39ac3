pub mod catalog;
pub mod summary;

pub use catalog::*;
pub use summary::*;
