use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::patch::PatchOptions;
use crate::send::DEFAULT_BASE;

#[derive(Parser, Debug)]
#[command(name = "quizops", version, about = "Quiz API payload sender and source patchers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// POST questions/answers JSON to the API
    Send(SendArgs),

    /// Apply literal source patches to the PHP project
    #[command(subcommand)]
    Patch(PatchCommand),
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("payload")
        .required(true)
        .multiple(true)
        .args(["questions", "answers"]),
))]
pub struct SendArgs {
    /// Base URL (prefix) for API routes
    #[arg(long, default_value = DEFAULT_BASE)]
    pub base: String,

    /// Path to questions JSON file
    #[arg(long, value_name = "path")]
    pub questions: Option<PathBuf>,

    /// Path to answers JSON file
    #[arg(long, value_name = "path")]
    pub answers: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum PatchCommand {
    /// Add the avatar_seed column to the users table
    Schema(PatchArgs),

    /// Add avatar_seed to /me and /login and insert the /profile route
    Endpoints(PatchArgs),

    /// Show question explanations in the study requirements page
    Template(PatchArgs),
}

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// File to patch [default depends on the patch]
    #[arg(long, value_name = "path")]
    pub file: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any anchor is missing
    #[arg(long)]
    pub strict: bool,
}

impl PatchArgs {
    pub fn options(&self) -> PatchOptions {
        PatchOptions {
            dry_run: self.dry_run,
            strict: self.strict,
        }
    }

    pub fn target(&self, default: &str) -> PathBuf {
        self.file.clone().unwrap_or_else(|| PathBuf::from(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_requires_a_payload() {
        let err = Cli::try_parse_from(["quizops", "send"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn send_defaults_base() {
        let cli = Cli::try_parse_from(["quizops", "send", "--answers", "answers.json"]).unwrap();
        match cli.command {
            Command::Send(args) => {
                assert_eq!(args.base, "http://localhost:8080/index.php?r=");
                assert!(args.questions.is_none());
                assert_eq!(args.answers, Some(PathBuf::from("answers.json")));
            }
            _ => panic!("Expected send"),
        }
    }

    #[test]
    fn patch_file_override() {
        let cli = Cli::try_parse_from([
            "quizops", "patch", "endpoints", "--file", "/srv/api/index.php", "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Command::Patch(PatchCommand::Endpoints(args)) => {
                assert_eq!(args.target("api/index.php"), PathBuf::from("/srv/api/index.php"));
                assert!(args.options().dry_run);
                assert!(!args.options().strict);
            }
            _ => panic!("Expected patch endpoints"),
        }
    }
}
