//! Command implementations for the gzinfo CLI.

pub mod info;
pub mod name;

pub use info::cmd_info;
pub use name::cmd_name;
