pub mod client;
pub mod config;
pub mod logging;
pub mod storage;
