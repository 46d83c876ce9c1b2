use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use symptomx::DEFAULT_TOP_K;

#[derive(Debug, Parser)]
#[command(
    name = "symptomx",
    about = "Match symptom descriptions against a disease catalog"
)]
pub struct Cli {
    /// Directory holding diseases.json or diseases.csv
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank diseases against a symptom description
    Diagnose(DiagnoseArgs),
    /// Show catalog status (record and vocabulary counts)
    Status(StatusArgs),
    /// List every known symptom phrase
    Vocab(VocabArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Diagnose --

#[derive(Debug, Parser)]
pub struct DiagnoseArgs {
    /// Symptoms, e.g. "fever, dry cough" (words are joined with spaces)
    #[arg(num_args = 0..)]
    pub symptoms: Vec<String>,

    /// Number of candidates to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_K)]
    pub count: usize,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl DiagnoseArgs {
    pub fn query(&self) -> String {
        self.symptoms.join(" ")
    }
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Vocab --

#[derive(Debug, Parser)]
pub struct VocabArgs {
    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "symptomx",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_diagnose_defaults() {
        let cli = Cli::parse_from(["symptomx", "diagnose", "fever,", "cough"]);
        match cli.command {
            Command::Diagnose(args) => {
                assert_eq!(args.query(), "fever, cough");
                assert_eq!(args.count, DEFAULT_TOP_K);
                assert!(!args.json);
            }
            _ => panic!("expected diagnose command"),
        }
    }

    #[test]
    fn parse_diagnose_without_symptoms() {
        let cli = Cli::parse_from(["symptomx", "diagnose", "-n", "2"]);
        match cli.command {
            Command::Diagnose(args) => {
                assert_eq!(args.query(), "");
                assert_eq!(args.count, 2);
            }
            _ => panic!("expected diagnose command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "symptomx",
            "status",
            "--json",
            "--data-dir",
            "/tmp/data",
            "-vv",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert!(matches!(
            cli.command,
            Command::Status(StatusArgs { json: true })
        ));
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
