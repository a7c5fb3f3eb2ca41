/// A line typed at the console, mapped to a page action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Book(usize),
    Cancel,
    Login,
    Examples,
    Help,
    Quit,
    // Recognized keyword with a bad argument, e.g. "book x"
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match (keyword.to_lowercase().as_str(), rest.is_empty()) {
            ("book", false) => match rest.parse::<usize>() {
                Ok(index) if index > 0 => Command::Book(index),
                _ => Command::Invalid(format!("`book` needs a slot number, got {:?}", rest)),
            },
            ("book", true) => Command::Invalid("`book` needs a slot number".to_string()),
            ("cancel", true) => Command::Cancel,
            ("login", true) => Command::Login,
            ("examples", true) => Command::Examples,
            ("help", true) => Command::Help,
            ("quit", true) | ("exit", true) => Command::Quit,
            // Anything else is a free-text prompt, including "" which the search rejects
            _ => Command::Search(line.to_string()),
        }
    }
}
