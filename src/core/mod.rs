// src/core/mod.rs

pub mod arg_parser;
pub mod catalog;
pub mod config_loader;
pub mod context;
pub mod descriptions;
pub mod errors;
pub mod registry;
