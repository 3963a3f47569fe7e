use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `laudo` binary.
#[derive(Debug, Parser)]
#[command(name = "laudo", version, about = "Ultrasound report assembly")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available exam types.
    Exams,
    /// Show the categories and findings of an exam type.
    Show {
        /// Exam type name or slug.
        exam: String,
    },
    /// Replay a selection script and print the assembled report.
    Generate {
        /// JSON session script.
        script: PathBuf,
        /// Save the report to the history.
        #[arg(long)]
        save: bool,
        /// Title used when saving.
        #[arg(long)]
        title: Option<String>,
        /// Also write the report as DOCX.
        #[arg(long)]
        docx: Option<PathBuf>,
        /// Ask the narrative generator for free text (falls back to the
        /// assembled report).
        #[arg(long)]
        narrative: bool,
        /// Render with a custom Tera letterhead template.
        #[arg(long, conflicts_with = "narrative")]
        template: Option<PathBuf>,
    },
    /// Saved report history.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Print a saved report split into pages.
    Paginate {
        id: String,
        #[arg(long, default_value_t = 90)]
        chars_per_line: usize,
        #[arg(long, default_value_t = 60)]
        lines_per_page: usize,
    },
    /// Configuration file management.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// List saved reports, newest first.
    List,
    /// Print a saved report.
    Show { id: String },
    /// Replace a saved report's content with the contents of a file.
    Update { id: String, file: PathBuf },
    /// Delete a saved report.
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, HistoryCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["laudo", "exams", "--config", "/tmp/c.json", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Exams));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.json")));
        assert!(cli.verbose);
        assert!(!cli.log_json);
    }

    #[test]
    fn generate_flags() {
        let cli = Cli::try_parse_from([
            "laudo",
            "generate",
            "sessao.json",
            "--save",
            "--title",
            "Abdome",
            "--docx",
            "laudo.docx",
        ])
        .unwrap();

        let Commands::Generate {
            script,
            save,
            title,
            docx,
            narrative,
            template,
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(script.to_str(), Some("sessao.json"));
        assert!(save);
        assert_eq!(title.as_deref(), Some("Abdome"));
        assert_eq!(docx.and_then(|p| p.to_str().map(str::to_string)).as_deref(), Some("laudo.docx"));
        assert!(!narrative);
        assert!(template.is_none());
    }

    #[test]
    fn narrative_and_template_conflict() {
        let result = Cli::try_parse_from([
            "laudo",
            "generate",
            "s.json",
            "--narrative",
            "--template",
            "t.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn history_update_takes_id_and_file() {
        let cli = Cli::try_parse_from(["laudo", "history", "update", "abc", "novo.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::Update { ref id, .. }
            } if id == "abc"
        ));
    }

    #[test]
    fn paginate_defaults() {
        let cli = Cli::try_parse_from(["laudo", "paginate", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Paginate {
                chars_per_line: 90,
                lines_per_page: 60,
                ..
            }
        ));
    }
}
