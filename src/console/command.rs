#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Setup,
    Teardown,
    /// Replace the board with a FEN placement (trailing fields allowed).
    Fen(String),
    State,
    Load(String),
    Owner(String),
    Select(String),
    Move(String, String),
    EndTurn,
    Show,
    Status,
    SetOption(Vec<String>),
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let arg = |i: usize| parts.get(i).map(|v| (*v).to_string()).unwrap_or_default();
    let rest = || parts[1..].join(" ");

    let cmd = match parts[0] {
        "setup" => ConsoleCommand::Setup,
        "teardown" => ConsoleCommand::Teardown,
        "fen" => ConsoleCommand::Fen(rest()),
        "state" => ConsoleCommand::State,
        "load" => ConsoleCommand::Load(arg(1)),
        "owner" => ConsoleCommand::Owner(arg(1)),
        "select" => ConsoleCommand::Select(arg(1)),
        "move" => ConsoleCommand::Move(arg(1), arg(2)),
        "endturn" => ConsoleCommand::EndTurn,
        "show" => ConsoleCommand::Show,
        "status" => ConsoleCommand::Status,
        "setoption" => ConsoleCommand::SetOption(parts[1..].iter().map(|p| (*p).to_string()).collect()),
        "quit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
