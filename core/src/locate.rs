use std::path::{Path, PathBuf};

use crate::command::Subcommand;
use crate::config::AppConfig;
use crate::error::DispatchError;

/// `<exe_dir>/../scripts`, the layout the scripts ship in next to `bin/`.
pub fn default_scripts_dir(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    exe_dir.join("..").join("scripts")
}

/// Directory holding the delegate scripts, honoring the config override.
pub fn scripts_dir(cfg: &AppConfig) -> Result<PathBuf, DispatchError> {
    if let Some(dir) = &cfg.scripts_dir {
        return Ok(dir.clone());
    }
    let exe = std::env::current_exe().map_err(DispatchError::InstallDir)?;
    Ok(default_scripts_dir(&exe))
}

/// Path of the delegate script for `command`; errors if it is not on disk.
pub fn resolve_script(scripts_dir: &Path, command: Subcommand) -> Result<PathBuf, DispatchError> {
    let path = scripts_dir.join(command.script());
    tracing::debug!(%command, path = %path.display(), "resolved delegate script");
    if !path.exists() {
        return Err(DispatchError::ScriptNotFound(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_is_sibling_of_bin() {
        let dir = default_scripts_dir(Path::new("/opt/wechat-report/bin/wechat-report"));
        assert_eq!(dir, PathBuf::from("/opt/wechat-report/bin/../scripts"));
    }

    #[test]
    fn config_override_wins() {
        let cfg = AppConfig {
            scripts_dir: Some(PathBuf::from("/srv/scripts")),
            ..AppConfig::default()
        };
        assert_eq!(scripts_dir(&cfg).unwrap(), PathBuf::from("/srv/scripts"));
    }

    #[test]
    fn missing_script_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_script(dir.path(), Subcommand::Generate).unwrap_err();
        match err {
            DispatchError::ScriptNotFound(path) => {
                assert_eq!(path, dir.path().join("generate_report.py"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn present_script_resolves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("analyze_chat.py"), "").unwrap();
        let path = resolve_script(dir.path(), Subcommand::Analyze).unwrap();
        assert_eq!(path, dir.path().join("analyze_chat.py"));
    }
}
