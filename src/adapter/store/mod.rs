//! Ledger persistence adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;
