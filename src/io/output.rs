use crate::core::ViewerRole;
use crate::directory::DirectoryRow;
use crate::leaderboard::{Dashboard, MemberStanding};
use crate::stats::GiveStats;
use std::io::Write;

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// Renders command results. Each call writes a complete document and
/// flushes the sink, so write errors surface as `Err`.
pub trait OutputWriter {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()>;

    fn write_directory(&mut self, rows: &[DirectoryRow], role: ViewerRole) -> anyhow::Result<()>;

    /// `standing` is present when the stats were computed for a known member.
    fn write_stats(
        &mut self,
        stats: &GiveStats,
        standing: Option<&MemberStanding>,
    ) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    use_color: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, use_color)),
    }
}
