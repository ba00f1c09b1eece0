pub mod export;
pub mod sessions;
