use crate::core::ViewerRole;
use crate::directory::DirectoryRow;
use crate::io::output::OutputWriter;
use crate::leaderboard::{Dashboard, MemberStanding};
use crate::stats::GiveStats;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct DirectoryListing<'a> {
    role: ViewerRole,
    count: usize,
    gives: &'a [DirectoryRow],
}

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a GiveStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    standing: Option<&'a MemberStanding>,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        self.write_json(dashboard)
    }

    fn write_directory(&mut self, rows: &[DirectoryRow], role: ViewerRole) -> anyhow::Result<()> {
        self.write_json(&DirectoryListing {
            role,
            count: rows.len(),
            gives: rows,
        })
    }

    fn write_stats(
        &mut self,
        stats: &GiveStats,
        standing: Option<&MemberStanding>,
    ) -> anyhow::Result<()> {
        self.write_json(&StatsReport { stats, standing })
    }
}
