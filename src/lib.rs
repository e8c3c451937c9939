// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod history;
pub mod model;
pub mod parser;
pub mod sample;
pub mod store;
pub mod tokenizer;
