//! External process execution

pub mod subprocess;

pub use subprocess::{CommandRunner, SystemRunner};
