pub mod cs;
pub mod error;
pub mod math;

pub use cs::{change, dynamic, greedy};
pub use error::{Error, Result};
