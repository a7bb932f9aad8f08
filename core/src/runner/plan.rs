use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// The exact child command line: `program script args...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatePlan {
    pub program: String,
    pub script: PathBuf,
    pub args: Vec<OsString>,
}

impl DelegatePlan {
    pub fn new(program: impl Into<String>, script: PathBuf, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            script,
            args,
        }
    }

    /// Argument vector handed to the program, script path first.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.script.clone().into_os_string());
        argv.extend(self.args.iter().cloned());
        argv
    }

    pub fn script_name(&self) -> String {
        self.script
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.script.display().to_string())
    }
}

/// Human-readable echo of the command, script shown by file name.
impl fmt::Display for DelegatePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.script_name())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan() -> DelegatePlan {
        DelegatePlan::new(
            "python",
            PathBuf::from("/opt/wr/scripts/analyze_chat.py"),
            vec!["chat.json".into(), "--output-stats".into(), "stats.json".into()],
        )
    }

    #[test]
    fn argv_puts_script_first() {
        assert_eq!(
            plan().argv(),
            vec![
                OsString::from("/opt/wr/scripts/analyze_chat.py"),
                OsString::from("chat.json"),
                OsString::from("--output-stats"),
                OsString::from("stats.json"),
            ]
        );
    }

    #[test]
    fn display_uses_script_file_name() {
        assert_eq!(
            plan().to_string(),
            "python analyze_chat.py chat.json --output-stats stats.json"
        );
    }
}
