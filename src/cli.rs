use clap::Parser;
use std::path::PathBuf;

use line_reverser::application::dto::ReverseRequest;
use line_reverser::config::ConfigFile;
use line_reverser::line_reversal::policies::TrimPolicy;
use line_reverser::shared::Result;

/// Reverse the characters of every line in a text file
#[derive(Parser, Debug)]
#[command(name = "line-reverser")]
#[command(version)]
#[command(about = "Reverse the characters of every line in a text file", long_about = None)]
pub struct Args {
    /// Input file (defaults to data/in_file.txt)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file, overwritten on every run (defaults to data/out_file.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to line-reverser.config.yml in the current directory, if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How input lines are trimmed: full or terminator
    #[arg(short, long)]
    pub trim: Option<TrimPolicy>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> std::result::Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Merges CLI flags over config values over built-in defaults
    pub fn to_request(&self, config: Option<&ConfigFile>) -> Result<ReverseRequest> {
        let mut builder = ReverseRequest::builder();

        let input = self
            .input
            .clone()
            .or_else(|| config.and_then(|c| c.input_path.clone()));
        if let Some(input) = input {
            builder = builder.input_path(input);
        }

        let output = self
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output_path.clone()));
        if let Some(output) = output {
            builder = builder.output_path(output);
        }

        let trim = match (self.trim, config) {
            (Some(trim), _) => Some(trim),
            (None, Some(config)) => config.trim_policy()?,
            (None, None) => None,
        };
        if let Some(trim) = trim {
            builder = builder.trim_policy(trim);
        }

        builder.build()
    }
}
