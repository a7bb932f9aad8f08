use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Program that runs the delegate scripts.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Overrides `<exe_dir>/../scripts`.
    #[serde(default)]
    pub scripts_dir: Option<PathBuf>,

    #[serde(default = "default_echo_command")]
    pub echo_command: bool,
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_echo_command() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            scripts_dir: None,
            echo_command: default_echo_command(),
        }
    }
}
