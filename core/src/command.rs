use std::fmt;

/// A subcommand understood by the dispatcher.
///
/// Each variant owns exactly one row in [`COMMANDS`]; adding a subcommand means
/// adding a variant and a row, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    Analyze,
    Generate,
}

/// Static description of a subcommand and the delegate script it maps to.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub command: Subcommand,
    pub name: &'static str,
    pub script: &'static str,
    /// Argument synopsis shown after the name in the help listing.
    pub synopsis: &'static str,
    pub summary: &'static str,
    pub example: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Subcommand::Analyze,
        name: "analyze",
        script: "analyze_chat.py",
        synopsis: "<chat_log.json> [options]",
        summary: "Analyze chat logs",
        example: "chat.json --output-stats stats.json --output-text text.txt",
    },
    CommandSpec {
        command: Subcommand::Generate,
        name: "generate",
        script: "generate_report.py",
        synopsis: "[options]",
        summary: "Generate report image",
        example: "--stats stats.json --ai-content ai.json --output report.png",
    },
];

impl Subcommand {
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.command)
    }

    pub fn spec(self) -> &'static CommandSpec {
        // Rows are laid out in variant declaration order.
        &COMMANDS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn script(self) -> &'static str {
        self.spec().script
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
