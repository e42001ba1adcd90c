//! different utility modules used throughout the project
/// terminal logger initialisation on top of simplelog
pub mod logger;
/// runtime settings (log level, simplification bound), optionally read from TOML
pub mod settings;
