use std::ffi::OsString;

use clap::Parser;

/// Raw argument capture. Classification happens in `wechat_report_core`, so
/// help flags and anything after the subcommand are taken verbatim.
#[derive(Parser, Debug, Clone)]
#[command(name = "wechat-report", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Subcommand followed by the arguments for its delegate script.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub argv: Vec<OsString>,
}

impl Args {
    /// Parses a full argument list (program name first) without letting clap
    /// interpret any user token.
    ///
    /// An escape `--` is inserted ahead of the user's arguments; everything
    /// after it is positional to clap, including a `--` the user typed.
    pub fn parse_raw<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args
            .next()
            .unwrap_or_else(|| OsString::from(wechat_report_core::api::PROGRAM_NAME));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);
        Self::parse_from(escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Vec<OsString> {
        let mut full = vec!["wechat-report"];
        full.extend_from_slice(args);
        Args::parse_raw(full.into_iter().map(OsString::from)).argv
    }

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn empty_is_empty() {
        assert!(parse(&[]).is_empty());
    }

    #[test]
    fn help_flags_are_captured_not_handled() {
        assert_eq!(parse(&["--help"]), os(&["--help"]));
        assert_eq!(parse(&["-h"]), os(&["-h"]));
    }

    #[test]
    fn leading_double_dash_is_kept() {
        assert_eq!(parse(&["--"]), os(&["--"]));
        assert_eq!(parse(&["--", "--help"]), os(&["--", "--help"]));
        assert_eq!(parse(&["--", "foo"]), os(&["--", "foo"]));
    }

    #[test]
    fn delegate_flags_pass_through() {
        assert_eq!(
            parse(&["analyze", "chat.json", "--output-stats", "stats.json", "-v", "--", "x"]),
            os(&["analyze", "chat.json", "--output-stats", "stats.json", "-v", "--", "x"])
        );
    }
}
