mod command_result;
pub mod context;
pub mod extract;
pub mod init;
pub mod runner;
pub mod validate;

pub use command_result::*;
