pub mod check;
mod command_result;
pub mod fix;
pub mod init;
pub mod pseudo;

pub use command_result::*;
