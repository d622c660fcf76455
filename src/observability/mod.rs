//! Observability: structured logging to a rotating file.

pub mod file_writer;
pub mod init;

pub use file_writer::LogWriter;
pub use init::init_tracing;
