// Core configuration types
mod core;
mod loader;

pub use self::core::{DisclosureConfig, GivebankConfig, OutputConfig, DEFAULT_CONFIG_TOML};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
