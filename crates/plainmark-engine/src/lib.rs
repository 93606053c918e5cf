pub mod formatter;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use formatter::{Formatter, format};
pub use io::IoError;
