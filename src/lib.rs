pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod level_file;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test;
