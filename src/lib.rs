pub mod advisor;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod log;
pub mod prompt;
pub mod provider;
pub mod ux;
pub mod wire;
pub mod wizard;
