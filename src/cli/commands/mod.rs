mod command_result;
pub mod dump;
pub mod init;

pub use command_result::*;
