pub mod extract;
pub mod init;
pub mod run;

mod command_result;

pub use command_result::*;
