pub mod error;
pub mod library;

pub use error::{Result, SeederError};
pub use library::{builtin_exercises, load_from_file, seed};
