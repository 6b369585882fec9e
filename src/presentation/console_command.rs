use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    LoadImage(PathBuf),
    Analyze,
    Help,
    Quit,
    Empty,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        match trimmed.to_ascii_lowercase().as_str() {
            "" => return ConsoleCommand::Empty,
            "analyze" | "analyse" => return ConsoleCommand::Analyze,
            "help" | "?" => return ConsoleCommand::Help,
            "quit" | "exit" => return ConsoleCommand::Quit,
            "open" => return ConsoleCommand::Help,
            _ => {}
        }

        let path = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) if verb.eq_ignore_ascii_case("open") => rest.trim(),
            _ => trimmed,
        };

        ConsoleCommand::LoadImage(PathBuf::from(strip_quotes(path)))
    }
}

fn strip_quotes(path: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = path
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    path
}
