pub mod audit;
pub mod backup;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod query;
