//! Parsing of PostgreSQL's `errcodes.txt` and rendering of the parsed
//! catalog as C++ enum values or switch cases.

pub mod catalog;
pub mod error;
pub mod render;
pub mod sqlstate;

pub use catalog::{Catalog, Entry, Severity, NAME_PREFIX};
pub use error::Error;
pub use render::{render, render_to_string, Mode};
pub use sqlstate::{SqlState, MAX_VALUE};
