//! Read-only access to the Lutris game library database (`pga.db`).
//!
//! The library database is SQLite and is never written by this tool; the
//! only query is the ordered slug listing the cover pipeline iterates over.

pub mod error;
pub mod reader;

pub use error::LibraryError;
pub use reader::Library;
