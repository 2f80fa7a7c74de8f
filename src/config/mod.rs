//! layered configuration: embedded defaults, global and local `themegen.toml`, then env
pub mod instance;
pub mod options;
pub mod validate;

pub use options::ThemegenCfg;
