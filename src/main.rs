use anyhow::Result;
use givebank::cli::Commands;
use givebank::commands::{self, DirectoryCommand, LeaderboardCommand, OutputTarget, StatsCommand};
use givebank::config::load_config;
use givebank::observability::{init_logging, install_panic_hook, CrashContext};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = givebank::cli::parse_args();

    install_panic_hook(crash_context(&cli.command));
    init_logging(verbosity(&cli.command));

    let config = load_config();

    match cli.command {
        Commands::Leaderboard {
            file,
            window_days,
            now,
            top,
            format,
            output,
            verbosity: _,
        } => commands::handle_leaderboard(
            LeaderboardCommand {
                file,
                window_days,
                now,
                top,
                target: OutputTarget { format, output },
            },
            &config,
        ),
        Commands::Directory {
            file,
            role,
            search,
            category,
            include_inactive,
            format,
            output,
            verbosity: _,
        } => commands::handle_directory(
            DirectoryCommand {
                file,
                role: role.into(),
                search,
                category,
                include_inactive,
                target: OutputTarget { format, output },
            },
            &config,
        ),
        Commands::Stats {
            file,
            role,
            viewer_id,
            now,
            format,
            output,
            verbosity: _,
        } => commands::handle_stats(
            StatsCommand {
                file,
                role: role.into(),
                viewer_id,
                now,
                target: OutputTarget { format, output },
            },
            &config,
        ),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn verbosity(command: &Commands) -> u8 {
    match command {
        Commands::Leaderboard { verbosity, .. }
        | Commands::Directory { verbosity, .. }
        | Commands::Stats { verbosity, .. } => *verbosity,
        Commands::Init { .. } => 0,
    }
}

fn crash_context(command: &Commands) -> CrashContext {
    let (name, input) = match command {
        Commands::Leaderboard { file, .. } => ("leaderboard", Some(file.clone())),
        Commands::Directory { file, .. } => ("directory", Some(file.clone())),
        Commands::Stats { file, .. } => ("stats", Some(file.clone())),
        Commands::Init { .. } => ("init", None),
    };
    CrashContext {
        command: name.to_string(),
        input,
    }
}
