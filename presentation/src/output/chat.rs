//! Chat bubble formatter
//!
//! Renders the conversation as alternating user/assistant bubbles. Every
//! function returns a `String`; printing and screen clearing belong to the
//! REPL.

use colored::Colorize;
use orderbot_domain::{DisplayEntry, DisplayLog, Menu, Transcript};

const TITLE: &str = "OrderBot - pizza orders";
const USER_LABEL: &str = "You";
const ASSISTANT_LABEL: &str = "OrderBot";

/// Formats conversation bubbles for console display
#[derive(Debug, Clone, Copy)]
pub struct ChatFormatter {
    color: bool,
}

impl ChatFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// The full screen: title, the scripted greeting pair, then every
    /// completed cycle in order.
    pub fn conversation(&self, transcript: &Transcript, log: &DisplayLog) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push('\n');

        let (greeting_user, greeting_assistant) = transcript.greeting();
        output.push_str(&self.exchange(greeting_user, greeting_assistant));

        for entry in log.entries() {
            output.push('\n');
            output.push_str(&self.bubble(entry));
        }

        output
    }

    /// One user bubble followed by one assistant bubble.
    pub fn exchange(&self, user: &str, assistant: &str) -> String {
        format!(
            "{}\n{}",
            self.bubble(DisplayEntry {
                is_user: true,
                text: user,
            }),
            self.bubble(DisplayEntry {
                is_user: false,
                text: assistant,
            })
        )
    }

    pub fn bubble(&self, entry: DisplayEntry<'_>) -> String {
        let label = if entry.is_user {
            self.paint_user(USER_LABEL)
        } else {
            self.paint_assistant(ASSISTANT_LABEL)
        };
        format!("{}\n{}\n", label, Self::indent(entry.text, "  "))
    }

    pub fn menu(&self, menu: &Menu) -> String {
        format!("\n{}\n{}\n", self.heading("Menu"), menu.render())
    }

    pub fn help(&self) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&self.heading("Commands:"));
        output.push('\n');
        output.push_str("  /help             - Show this help\n");
        output.push_str("  /menu             - Show the menu\n");
        output.push_str("  /history          - Show the whole conversation again\n");
        output.push_str("  /quit, /exit, /q  - Leave\n");
        output
    }

    pub fn error(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "Error:".red().bold(), message)
        } else {
            format!("Error: {}", message)
        }
    }

    pub fn notice(&self, message: &str) -> String {
        if self.color {
            message.dimmed().to_string()
        } else {
            message.to_string()
        }
    }

    fn header(&self) -> String {
        let line = "=".repeat(44);
        if self.color {
            format!("{}\n{:^44}\n{}\n", line.cyan(), TITLE.bold(), line.cyan())
        } else {
            format!("{}\n{:^44}\n{}\n", line, TITLE, line)
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_user(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_assistant(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ChatFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderbot_domain::PIZZA_MENU;

    #[test]
    fn test_fresh_conversation_shows_only_greeting() {
        let transcript = Transcript::initialize();
        let output = ChatFormatter::plain().conversation(&transcript, &DisplayLog::new());

        assert!(output.contains(TITLE));
        assert!(output.ends_with("You\n  assalam o alaikum\n\nOrderBot\n  Walaikum Salam, How are you?\n"));
    }

    #[test]
    fn test_pair_renders_beneath_greeting() {
        let transcript = Transcript::initialize();
        let mut log = DisplayLog::new();
        log.record(
            "I'd like a large pepperoni pizza",
            "Got it! One large pepperoni pizza. Anything else?",
        );

        let output = ChatFormatter::plain().conversation(&transcript, &log);

        let greeting = output.find("Walaikum Salam").unwrap();
        let user = output.find("I'd like a large pepperoni pizza").unwrap();
        let reply = output.find("Got it! One large pepperoni pizza").unwrap();
        assert!(greeting < user && user < reply);
        assert_eq!(output.matches("\nYou\n").count(), 2);
        assert_eq!(output.matches("OrderBot\n  ").count(), 2);
    }

    #[test]
    fn test_multiline_reply_is_indented() {
        let bubble = ChatFormatter::plain().bubble(DisplayEntry {
            is_user: false,
            text: "Your order:\n- 1 large pepperoni 12.95",
        });
        assert_eq!(
            bubble,
            "OrderBot\n  Your order:\n  - 1 large pepperoni 12.95\n"
        );
    }

    #[test]
    fn test_exchange() {
        let output = ChatFormatter::plain().exchange("fries", "Large or small?");
        assert_eq!(output, "You\n  fries\n\nOrderBot\n  Large or small?\n");
    }

    #[test]
    fn test_menu_lists_every_item() {
        let output = ChatFormatter::plain().menu(&PIZZA_MENU);
        assert!(output.contains("Menu"));
        assert!(output.contains("- Fries: 4.50, 3.50"));
    }

    #[test]
    fn test_plain_error_and_help() {
        let formatter = ChatFormatter::plain();
        assert_eq!(formatter.error("Request timed out"), "Error: Request timed out");
        let help = formatter.help();
        for command in ["/help", "/menu", "/history", "/quit"] {
            assert!(help.contains(command));
        }
    }
}
