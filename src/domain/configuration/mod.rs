pub mod generate_config;
pub mod loader;

pub use generate_config::{GenerateConfig, TileConfig};
pub use loader::{CONFIG_FILE_NAME, load_config, parse_config_content};
