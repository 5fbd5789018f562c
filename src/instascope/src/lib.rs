pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod lookup;
pub mod report;
