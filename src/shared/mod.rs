pub mod errors;
pub mod fs_open;
pub mod logging;

pub use errors::LogFileError;
