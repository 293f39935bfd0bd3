//! REPL (Read-Eval-Print Loop) for the blog form
//!
//! Plain lines are typed into the content as paragraphs; lines starting with
//! `/` are form commands.

use crate::form::session::{FormSession, load_image};
use crate::output::preview::PreviewFormatter;
use crate::progress::spinner::UploadSpinner;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::warn;

/// Number of history entries kept on disk
const HISTORY_CAPACITY: usize = 500;

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Title(String),
    Category(String),
    Categories,
    Content(String),
    Clear,
    Image(PathBuf),
    Preview,
    Markup,
    Save,
    Options,
    Help,
    Quit,
    /// A line of content text
    Text(String),
    /// A `/command` that needs an argument it did not get
    MissingArgument(&'static str),
    Unknown(String),
    Empty,
}

impl FormCommand {
    /// Parse one input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return FormCommand::Empty;
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return FormCommand::Text(trimmed.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "title" | "t" => FormCommand::Title(arg.to_string()),
            "category" | "c" if arg.is_empty() => FormCommand::Categories,
            "category" | "c" => FormCommand::Category(arg.to_string()),
            "categories" => FormCommand::Categories,
            "content" if arg.is_empty() => FormCommand::MissingArgument("/content <markup>"),
            "content" => FormCommand::Content(arg.to_string()),
            "clear" => FormCommand::Clear,
            "image" | "img" if arg.is_empty() => FormCommand::MissingArgument("/image <path>"),
            "image" | "img" => FormCommand::Image(PathBuf::from(arg)),
            "preview" | "p" => FormCommand::Preview,
            "markup" | "raw" => FormCommand::Markup,
            "save" | "s" => FormCommand::Save,
            "options" => FormCommand::Options,
            "help" | "h" | "?" => FormCommand::Help,
            "quit" | "exit" | "q" => FormCommand::Quit,
            _ => FormCommand::Unknown(trimmed.to_string()),
        }
    }
}

/// Interactive blog form REPL
pub struct FormRepl {
    session: FormSession,
    show_preview: bool,
    history_file: Option<PathBuf>,
}

impl FormRepl {
    /// Create a new FormRepl
    pub fn new(session: FormSession) -> Self {
        Self {
            session,
            show_preview: false,
            history_file: dirs::data_dir().map(|p| p.join("blog-composer").join("history.txt")),
        }
    }

    /// Print the preview after every change
    pub fn with_preview(mut self, show: bool) -> Self {
        self.show_preview = show;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = &self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("blog".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle(FormCommand::parse(&line)).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                // Ctrl-D and any other signal end the session
                _ => {
                    println!("Bye! Your draft content is kept for next time.");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Blog Composer - Draft            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if !self.session.draft().is_blank() {
            println!("{}", "Restored your previous draft.".green());
            println!();
        }
        println!("Type text to add a paragraph. /help lists commands.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /title <text>       - Set the title");
        println!("  /category [name]    - Pick a category (no name lists them)");
        println!("  /content <markup>   - Replace the content markup");
        println!("  /clear              - Empty the content");
        println!("  /image <path>       - Upload an image and insert it");
        println!("  /preview, /p        - Show the preview");
        println!("  /markup             - Show the raw content markup");
        println!("  /save, /s           - Save the post and clear the draft");
        println!("  /options            - Show editor toolbar and fonts");
        println!("  /quit, /exit, /q    - Exit (content is kept)");
        println!();
    }

    /// Handle a parsed line. Returns true if the REPL should exit.
    async fn handle(&mut self, command: FormCommand) -> bool {
        let changed = match command {
            FormCommand::Empty => false,
            FormCommand::Quit => {
                println!("Bye! Your draft content is kept for next time.");
                return true;
            }
            FormCommand::Help => {
                self.print_help();
                false
            }
            FormCommand::Title(title) => {
                self.session.set_title(&title);
                true
            }
            FormCommand::Categories => {
                self.print_categories();
                false
            }
            FormCommand::Category(name) => match self.session.select_category(&name) {
                Ok(_) => true,
                Err(e) => {
                    println!("{} {}", "!".red(), e);
                    self.print_categories();
                    false
                }
            },
            FormCommand::Content(markup) => {
                self.session.replace_content(&markup);
                true
            }
            FormCommand::Clear => {
                self.session.replace_content("");
                true
            }
            FormCommand::Text(text) => {
                self.session.type_line(&text);
                true
            }
            FormCommand::Image(path) => self.insert_image(path).await,
            FormCommand::Preview => {
                self.print_preview();
                false
            }
            FormCommand::Markup => {
                println!("{}", PreviewFormatter::format_raw(self.session.draft()));
                false
            }
            FormCommand::Save => {
                let saved = self.session.save();
                println!("{}", PreviewFormatter::format_saved(&saved));
                false
            }
            FormCommand::Options => {
                println!("{}", PreviewFormatter::format_options(self.session.options()));
                false
            }
            FormCommand::MissingArgument(usage) => {
                println!("Usage: {}", usage);
                false
            }
            FormCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        };

        if changed && self.show_preview {
            self.print_preview();
        }
        false
    }

    async fn insert_image(&mut self, path: PathBuf) -> bool {
        let file = match load_image(&path).await {
            Ok(file) => file,
            Err(e) => {
                println!("{} {}", "!".red(), e);
                return false;
            }
        };

        let spinner = UploadSpinner::start(&file.name);
        match self.session.insert_image(file).await {
            Ok(outcome) => {
                let inserted = outcome.is_inserted();
                spinner.finish(&outcome);
                inserted
            }
            Err(e) => {
                spinner.abandon();
                println!("{} {}", "!".red(), e);
                false
            }
        }
    }

    fn print_categories(&self) {
        println!(
            "{}",
            PreviewFormatter::format_categories(self.session.draft().category)
        );
    }

    fn print_preview(&self) {
        println!();
        println!(
            "{}",
            PreviewFormatter::format(self.session.draft(), self.session.options())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_content() {
        assert_eq!(
            FormCommand::parse("  Hello world "),
            FormCommand::Text("Hello world".to_string())
        );
        assert_eq!(FormCommand::parse("   "), FormCommand::Empty);
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            FormCommand::parse("/title  My first post"),
            FormCommand::Title("My first post".to_string())
        );
        assert_eq!(
            FormCommand::parse("/c Health"),
            FormCommand::Category("Health".to_string())
        );
        assert_eq!(
            FormCommand::parse("/image ./pics/cat.png"),
            FormCommand::Image(PathBuf::from("./pics/cat.png"))
        );
        assert_eq!(
            FormCommand::parse("/content <p>x</p>"),
            FormCommand::Content("<p>x</p>".to_string())
        );
    }

    #[test]
    fn test_commands_without_arguments() {
        assert_eq!(FormCommand::parse("/category"), FormCommand::Categories);
        assert_eq!(FormCommand::parse("/s"), FormCommand::Save);
        assert_eq!(FormCommand::parse("/q"), FormCommand::Quit);
        assert_eq!(
            FormCommand::parse("/image"),
            FormCommand::MissingArgument("/image <path>")
        );
        // An empty title is allowed
        assert_eq!(FormCommand::parse("/title"), FormCommand::Title(String::new()));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            FormCommand::parse("/publish now"),
            FormCommand::Unknown("/publish now".to_string())
        );
    }
}
