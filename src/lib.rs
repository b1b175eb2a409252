pub mod config;
pub mod patcher;
