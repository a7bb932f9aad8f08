use crate::command::COMMANDS;

pub const PROGRAM_NAME: &str = "wechat-report";

/// Help text listing every subcommand in [`COMMANDS`] with an example line.
pub fn usage() -> String {
    let entries: Vec<(String, &str)> = COMMANDS
        .iter()
        .map(|spec| (format!("{} {}", spec.name, spec.synopsis), spec.summary))
        .collect();
    let width = entries.iter().map(|(head, _)| head.len()).max().unwrap_or(0);

    let mut lines = vec![
        String::new(),
        format!("Usage: {PROGRAM_NAME} <command> [options]"),
        String::new(),
        "Commands:".to_string(),
    ];
    lines.extend(
        entries
            .iter()
            .map(|(head, summary)| format!("  {head:<width$}   {summary}")),
    );
    lines.push(String::new());
    lines.push("Examples:".to_string());
    lines.extend(
        COMMANDS
            .iter()
            .map(|spec| format!("  {PROGRAM_NAME} {} {}", spec.name, spec.example)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
