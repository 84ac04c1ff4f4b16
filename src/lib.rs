pub mod cli;
pub mod client;
pub mod error;
pub mod model;
pub mod patch;
pub mod payload;
pub mod send;
pub mod snapshot;
