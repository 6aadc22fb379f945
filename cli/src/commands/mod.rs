//! CLI Commands
//!
//! All rxaes CLI commands organized as separate modules.

mod backend;
mod check;
mod fill;
mod hash;

pub use backend::print_backend;
pub use check::check_mode;
pub use fill::{fill_stream, FillArgs};
pub use hash::{digest_file, hash_files};
