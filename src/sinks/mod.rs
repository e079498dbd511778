//! Ready-made byte destinations
//!
//! Any `std::io::Write + Send` value can back a sink; these cover the
//! common cases. Stdout is used directly via `std::io::stdout()`.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
