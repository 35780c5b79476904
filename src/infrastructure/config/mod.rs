//! Configuration source adapters

mod toml_file;

pub use toml_file::TomlFileConfig;
