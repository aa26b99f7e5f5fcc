//! Storage helpers for finboard
//!
//! finboard never owns financial records; the only files it reads and writes
//! are API snapshot exports and its settings.

pub mod file_io;

pub use file_io::{read_json, read_json_required, write_json_atomic};
