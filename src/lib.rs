pub mod codegen;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod protocol;
