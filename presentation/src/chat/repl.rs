//! REPL (Read-Eval-Print Loop) for the order conversation

use crate::config::ReplConfig;
use crate::output::ChatFormatter;
use crate::progress::SpinnerProgress;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use orderbot_application::{
    CompletionProgress, NoProgress, OrderSession, TakeOrderError, TakeOrderUseCase,
};
use orderbot_domain::PIZZA_MENU;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end the REPL
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Line editor error: {0}")]
    Editor(#[from] ReadlineError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Session(#[from] TakeOrderError),
}

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Menu,
    History,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let command = match line {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/menu" => ReplCommand::Menu,
            "/history" => ReplCommand::History,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// How a submitted line ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The assistant replied; the conversation was re-rendered.
    Replied,
    /// The error was shown; the session continues.
    Failed,
    /// Ctrl-C while waiting; the user turn stays in the transcript.
    Cancelled,
}

/// Interactive order REPL
///
/// Owns the session for one process run and drives one interaction cycle
/// per submitted line.
pub struct OrderRepl {
    use_case: TakeOrderUseCase,
    session: OrderSession,
    formatter: ChatFormatter,
    config: ReplConfig,
}

impl OrderRepl {
    /// Create a REPL with a freshly seeded session
    pub fn new(use_case: TakeOrderUseCase) -> Self {
        let session = use_case.start_session();
        Self {
            use_case,
            session,
            formatter: ChatFormatter::default(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_formatter(mut self, formatter: ChatFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn session(&self) -> &OrderSession {
        &self.session
    }

    /// Run the interactive REPL until `/quit`, EOF or a fatal error
    pub async fn run(&mut self) -> Result<(), ReplError> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.render_conversation()?;
        println!("{}", self.formatter.notice("Type /help for commands."));

        let result = self.read_loop(&mut rl).await;

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        result
    }

    async fn read_loop(&mut self, rl: &mut DefaultEditor) -> Result<(), ReplError> {
        loop {
            let readline = rl.readline("> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command)? {
                            break;
                        }
                        continue;
                    }

                    self.submit(line).await?;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Handle a slash command. Returns true if the REPL should exit.
    fn handle_command(&self, command: ReplCommand) -> Result<bool, ReplError> {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return Ok(true);
            }
            ReplCommand::Help => println!("{}", self.formatter.help()),
            ReplCommand::Menu => println!("{}", self.formatter.menu(&PIZZA_MENU)),
            ReplCommand::History => self.render_conversation()?,
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        Ok(false)
    }

    /// Run one interaction cycle for a submitted line.
    ///
    /// Fatal errors are returned; everything else is shown and the session
    /// goes on.
    pub async fn submit(&mut self, line: &str) -> Result<TurnOutcome, ReplError> {
        let progress = self.progress();

        let result = tokio::select! {
            result = self.use_case.execute(&mut self.session, line, progress.as_ref()) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        drop(progress);

        match result {
            Some(Ok(reply)) => {
                self.render_reply(line.trim(), &reply)?;
                Ok(TurnOutcome::Replied)
            }
            Some(Err(e)) if e.is_fatal() => {
                eprintln!("{}", self.formatter.error(&e.to_string()));
                Err(e.into())
            }
            Some(Err(e)) => {
                if self.redraws_after(Some(&e)) {
                    self.render_conversation()?;
                }
                eprintln!("{}", self.formatter.error(&e.to_string()));
                if !e.is_rejected_input() {
                    println!(
                        "{}",
                        self.formatter
                            .notice("Your message was kept. Send another line to try again.")
                    );
                }
                Ok(TurnOutcome::Failed)
            }
            None => {
                info!("Completion abandoned by the user");
                if self.redraws_after(None) {
                    self.render_conversation()?;
                }
                println!("{}", self.formatter.notice("Cancelled."));
                Ok(TurnOutcome::Cancelled)
            }
        }
    }

    /// Send a single message and return the reply (no editor, no redraw).
    pub async fn send_once(&mut self, message: &str) -> Result<String, TakeOrderError> {
        let progress = self.progress();
        self.use_case
            .execute(&mut self.session, message, progress.as_ref())
            .await
    }

    fn progress(&self) -> Box<dyn CompletionProgress> {
        if self.config.show_progress {
            Box::new(SpinnerProgress::new())
        } else {
            Box::new(NoProgress)
        }
    }

    /// Whether a turn that ended without a reply redraws the screen.
    /// Rejected input never left `Idle`, so it leaves the screen alone.
    fn redraws_after(&self, error: Option<&TakeOrderError>) -> bool {
        self.config.redraw && error.is_none_or(|e| !e.is_rejected_input())
    }

    fn render_reply(&self, user: &str, reply: &str) -> Result<(), ReplError> {
        if self.config.redraw {
            self.render_conversation()
        } else {
            println!("\n{}", self.formatter.exchange(user, reply));
            Ok(())
        }
    }

    /// Clear the terminal and print the whole conversation.
    fn render_conversation(&self) -> Result<(), ReplError> {
        let mut stdout = io::stdout();
        if self.config.redraw {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        println!(
            "{}",
            self.formatter
                .conversation(self.session.transcript(), self.session.display_log())
        );
        Ok(())
    }
}
