use crate::core::{Category, ViewerRole};
use crate::directory::DirectoryRow;
use crate::io::output::OutputWriter;
use crate::leaderboard::{Dashboard, Leaderboard, MemberStanding, RankBadge};
use crate::stats::GiveStats;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_board(&mut self, title: &str, board: &Leaderboard) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;

        if board.is_empty() {
            writeln!(self.writer, "_No gives yet._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Rank | Member | Gives |")?;
        writeln!(self.writer, "|------|--------|-------|")?;
        for (rank, entry) in board.ranked() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                RankBadge::for_rank(rank),
                escape_cell(&entry.display_name),
                entry.contribution_count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_standing(&mut self, standing: &MemberStanding) -> anyhow::Result<()> {
        writeln!(self.writer, "## Your Standing")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Total Gives | {} |", standing.total_gives)?;
        writeln!(
            self.writer,
            "| Last {} Days | {} |",
            standing.window_days, standing.window_gives
        )?;
        match standing.rank {
            Some(rank) => writeln!(self.writer, "| Rank | #{rank} |")?,
            None => writeln!(self.writer, "| Rank | N/A |")?,
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        writeln!(self.writer, "# Give Bank Leaderboard")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        self.write_board("All Time", &dashboard.all_time)?;
        let trailing_title = format!("Last {} Days", dashboard.window_days);
        self.write_board(&trailing_title, &dashboard.trailing)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_directory(&mut self, rows: &[DirectoryRow], role: ViewerRole) -> anyhow::Result<()> {
        writeln!(self.writer, "# All Gives ({})", rows.len())?;
        writeln!(self.writer)?;
        if role == ViewerRole::Standard {
            writeln!(self.writer, "_Contact details are masked._")?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "| Name | Category | City | Member | Email | Phone |")?;
        writeln!(self.writer, "|------|----------|------|--------|-------|-------|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                escape_cell(&row.name),
                escape_cell(row.category.label()),
                escape_cell(row.city.as_deref().unwrap_or("-")),
                escape_cell(&row.contributor),
                escape_cell(&row.contact.email),
                escape_cell(&row.contact.phone)
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_stats(
        &mut self,
        stats: &GiveStats,
        standing: Option<&MemberStanding>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# Give Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Total Gives | {} |", stats.total_gives)?;
        writeln!(self.writer, "| Active Gives | {} |", stats.active_gives)?;
        writeln!(self.writer)?;

        if let Some(standing) = standing {
            self.write_standing(standing)?;
        }

        let busiest = stats.busiest_categories();
        if !busiest.is_empty() {
            writeln!(self.writer, "## By Category")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Category | Active Gives |")?;
            writeln!(self.writer, "|----------|--------------|")?;
            for (slug, count) in busiest {
                writeln!(self.writer, "| {} | {} |", Category::from_slug(slug).label(), count)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
