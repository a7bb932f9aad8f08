pub mod load;
pub mod types;

pub use load::{apply_env_overrides, load_default, load_from_path, CONFIG_FILE};
pub use types::AppConfig;
