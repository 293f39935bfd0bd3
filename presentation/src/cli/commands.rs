//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for blog-composer
#[derive(Parser, Debug)]
#[command(name = "blog-composer")]
#[command(author, version, about = "Compose a blog post with a persistent local draft")]
#[command(long_about = r#"
blog-composer edits a single blog draft: a title, a category and rich-text
content. Content is written to the local draft store on every change, so an
interrupted session picks up where it left off. Saving reports the post and
clears the draft.

Configuration files are loaded from (in priority order):
1. BLOG_COMPOSER_* environment variables
2. --config <path>     Explicit config file
3. ./composer.toml     Project-level config
4. ~/.config/blog-composer/config.toml   Global config

Example:
  blog-composer                       # interactive form
  blog-composer append "First paragraph"
  blog-composer image ./diagram.png
  blog-composer save --title "Hello" --category Technology
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Path of the draft store (overrides [storage] path)
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Keep the draft in memory only
    #[arg(long, global = true, conflicts_with = "store")]
    pub ephemeral: bool,
}

/// One-shot operations on the stored draft
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive form (default)
    Edit,

    /// Replace the draft content with the given markup
    Content {
        /// New content markup
        markup: String,
    },

    /// Append a paragraph of text to the draft content
    Append {
        /// Paragraph text (HTML-escaped before insertion)
        text: String,
    },

    /// Upload an image and insert it into the draft content
    Image {
        /// Image file to upload
        path: PathBuf,
    },

    /// Report the draft and clear it
    Save {
        /// Title to save with
        #[arg(long)]
        title: Option<String>,

        /// Category to save with
        #[arg(long)]
        category: Option<String>,

        /// Print the saved record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the draft preview
    Show {
        /// Print the raw markup instead of rendered text
        #[arg(long)]
        raw: bool,
    },

    /// Show the editor toolbar and font options
    Options,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["blog-composer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_save_with_fields() {
        let cli = Cli::try_parse_from([
            "blog-composer",
            "save",
            "--title",
            "Hello",
            "--category",
            "Health",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Save {
                title: Some("Hello".to_string()),
                category: Some("Health".to_string()),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["blog-composer", "show", "--ephemeral", "-vv"]).unwrap();
        assert!(cli.ephemeral);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_ephemeral_conflicts_with_store() {
        let result =
            Cli::try_parse_from(["blog-composer", "--ephemeral", "--store", "/tmp/s.json"]);
        assert!(result.is_err());
    }
}
