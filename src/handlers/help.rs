// Sample prompts offered to new users
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "30 minutes tomorrow afternoon",
    "1 hour next Tuesday between 10 and 14",
    "Find 3 slots of 45 minutes this week",
    "15 minute call on Friday morning",
];

pub const HELP_TEXT: &str = "\
Describe when you want to meet, for example \"30 minutes tomorrow afternoon\".

Commands:
  book <n>   open the booking form for slot n
  cancel     close the booking form
  login      show the authorization link
  examples   list example prompts
  help       show this help
  quit       exit";

pub fn examples_text() -> String {
    EXAMPLE_PROMPTS
        .iter()
        .enumerate()
        .map(|(i, prompt)| format!("  {}. {}", i + 1, prompt))
        .collect::<Vec<_>>()
        .join("\n")
}
