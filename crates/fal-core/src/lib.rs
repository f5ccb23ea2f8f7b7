pub mod config;
pub mod logging;

pub mod client;
pub mod console;
pub mod request;
pub mod transport;
