use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Error: script not found at {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Failed to start {program}. Make sure \"{program}\" is in your PATH.")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for {program}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the dispatcher's install directory")]
    InstallDir(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DispatchError {
    /// Exit code the dispatcher terminates with for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, DispatchError::UnknownCommand(_))
    }
}
