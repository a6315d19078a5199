use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jobmatch",
    about = "Match resumes against a job posting table",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the full analysis on one resume file and print the report as JSON
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Resume file: PDF or plain text
    #[arg(long)]
    pub resume: PathBuf,
    /// Posting table CSV, overriding JOBS_CSV
    #[arg(long)]
    pub jobs: Option<PathBuf>,
}

impl Cli {
    /// `serve` when no subcommand is given.
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["jobmatch"]).unwrap();
        assert!(matches!(cli.command(), Command::Serve(ServeArgs { port: None })));
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from([
            "jobmatch",
            "analyze",
            "--resume",
            "cv.pdf",
            "--jobs",
            "postings.csv",
        ])
        .unwrap();
        match cli.command() {
            Command::Analyze(args) => {
                assert_eq!(args.resume, PathBuf::from("cv.pdf"));
                assert_eq!(args.jobs, Some(PathBuf::from("postings.csv")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_analyze_requires_resume() {
        assert!(Cli::try_parse_from(["jobmatch", "analyze"]).is_err());
    }
}
