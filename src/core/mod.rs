pub mod app;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod types;

#[cfg(test)]
pub(crate) mod log_capture;
