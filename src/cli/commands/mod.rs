pub mod compare;
mod command_result;
pub mod helper;
pub mod init;
pub mod usage;

pub use command_result::*;
