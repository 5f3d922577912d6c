pub mod config;
pub mod init;
pub mod merge;
pub mod shift;
