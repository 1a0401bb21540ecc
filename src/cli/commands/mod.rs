mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod scan;

pub use command_result::*;
pub use helper::finish;
