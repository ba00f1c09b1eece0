pub mod generator;
pub mod identity;
pub mod server;
pub mod target;
