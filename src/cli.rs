use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "givebank")]
#[command(about = "Referral leaderboards and contact disclosure for Give Bank listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank contributors all-time and over a trailing window
    Leaderboard {
        /// Give listing exported from the directory API (JSON)
        file: PathBuf,

        /// Length of the trailing window in days (overrides config)
        #[arg(long = "window-days")]
        window_days: Option<u32>,

        /// Reference instant for the trailing window (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Show only the top N contributors on each board
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List gives with contact details disclosed for the viewer's role
    Directory {
        /// Give listing exported from the directory API (JSON)
        file: PathBuf,

        /// Role of the viewer
        #[arg(long, value_enum, default_value = "standard")]
        role: RoleArg,

        /// Case-insensitive text to search for
        #[arg(long, default_value = "")]
        search: String,

        /// Only list gives in this category (slug, e.g. "food_beverage")
        #[arg(long)]
        category: Option<String>,

        /// Also list inactive gives
        #[arg(long = "include-inactive")]
        include_inactive: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Summarise gives by category for a viewer
    Stats {
        /// Give listing exported from the directory API (JSON)
        file: PathBuf,

        /// Role of the viewer
        #[arg(long, value_enum, default_value = "standard")]
        role: RoleArg,

        /// Contributor id of the viewer; standard viewers only see their own gives
        #[arg(long = "viewer-id")]
        viewer_id: Option<u64>,

        /// Reference instant for the viewer's trailing gives (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .givebank.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Regular member; contact details are masked
    Standard,
    /// Superadmin; contact details are shown as stored
    Elevated,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<RoleArg> for crate::core::ViewerRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Standard => crate::core::ViewerRole::Standard,
            RoleArg::Elevated => crate::core::ViewerRole::Elevated,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ViewerRole;

    #[test]
    fn test_output_format_conversion() {
        let json: crate::io::output::OutputFormat = OutputFormat::Json.into();
        assert_eq!(json, crate::io::output::OutputFormat::Json);
        let md: crate::io::output::OutputFormat = OutputFormat::Markdown.into();
        assert_eq!(md, crate::io::output::OutputFormat::Markdown);
    }

    #[test]
    fn test_role_conversion() {
        assert_eq!(ViewerRole::from(RoleArg::Elevated), ViewerRole::Elevated);
        assert_eq!(ViewerRole::from(RoleArg::Standard), ViewerRole::Standard);
    }

    #[test]
    fn test_parse_leaderboard_args() {
        let cli = Cli::try_parse_from([
            "givebank",
            "leaderboard",
            "gives.json",
            "--window-days",
            "30",
            "--top",
            "5",
            "-f",
            "json",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Leaderboard {
                file,
                window_days,
                top,
                format,
                verbosity,
                ..
            } => {
                assert_eq!(file, PathBuf::from("gives.json"));
                assert_eq!(window_days, Some(30));
                assert_eq!(top, Some(5));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(verbosity, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_directory_role_defaults_to_standard() {
        let cli = Cli::try_parse_from(["givebank", "directory", "gives.json"]).unwrap();
        match cli.command {
            Commands::Directory { role, search, .. } => {
                assert_eq!(role, RoleArg::Standard);
                assert!(search.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
