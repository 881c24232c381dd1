use crate::core::{Category, ViewerRole};
use crate::directory::DirectoryRow;
use crate::io::output::OutputWriter;
use crate::leaderboard::{Dashboard, Leaderboard, LeaderboardEntry, MemberStanding, RankBadge};
use crate::stats::GiveStats;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, use_color: bool) -> Self {
        Self { writer, use_color }
    }

    fn paint(&self, text: &str, style: fn(ColoredString) -> ColoredString) -> String {
        if self.use_color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        let rule = self.paint(RULE, |s| s.cyan());
        let title = self.paint(title, |s| s.bold().cyan());
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "  {title}")?;
        writeln!(self.writer, "{rule}")?;
        Ok(())
    }

    fn write_board(
        &mut self,
        title: &str,
        board: &Leaderboard,
        podium_size: usize,
    ) -> anyhow::Result<()> {
        let heading = self.paint(title, |s| s.bold());
        writeln!(self.writer)?;
        writeln!(self.writer, "{heading}")?;

        if board.is_empty() {
            let empty = self.paint("No gives yet.", |s| s.dimmed());
            writeln!(self.writer, "  {empty}")?;
            return Ok(());
        }

        let (podium, remainder) = board.split_podium(podium_size);
        for (index, entry) in podium.iter().enumerate() {
            let line = self.podium_line(index + 1, entry);
            writeln!(self.writer, "  {line}")?;
        }

        if !remainder.is_empty() {
            let mut table = new_table();
            table.set_header(vec!["Rank", "Member", "Gives"]);
            for (offset, entry) in remainder.iter().enumerate() {
                table.add_row(vec![
                    RankBadge::for_rank(podium.len() + offset + 1).to_string(),
                    entry.display_name.clone(),
                    entry.contribution_count.to_string(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        Ok(())
    }

    fn podium_line(&self, rank: usize, entry: &LeaderboardEntry) -> String {
        let badge = RankBadge::for_rank(rank);
        let name = match badge {
            RankBadge::Gold => self.paint(&entry.display_name, |s| s.bold().yellow()),
            RankBadge::Silver => self.paint(&entry.display_name, |s| s.bold().white()),
            RankBadge::Bronze => self.paint(&entry.display_name, |s| s.bold().red()),
            RankBadge::Numbered(_) => self.paint(&entry.display_name, |s| s.bold()),
        };
        let gives = if entry.contribution_count == 1 { "give" } else { "gives" };
        format!("{badge} {name} ({} {gives})", entry.contribution_count)
    }

    fn write_standing(&mut self, standing: &MemberStanding) -> anyhow::Result<()> {
        let heading = self.paint("Your standing", |s| s.bold());
        let rank = match standing.rank {
            Some(rank) => self.paint(&format!("#{rank}"), |s| s.bold().yellow()),
            None => self.paint("unranked", |s| s.dimmed()),
        };
        writeln!(self.writer)?;
        writeln!(self.writer, "{heading}")?;
        writeln!(self.writer, "  Total gives:  {}", standing.total_gives)?;
        writeln!(
            self.writer,
            "  Last {} days: {}",
            standing.window_days, standing.window_gives
        )?;
        writeln!(self.writer, "  Rank:         {rank}")?;
        Ok(())
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        self.write_header("GIVE BANK LEADERBOARD")?;
        self.write_board("🏅 All Time", &dashboard.all_time, dashboard.podium_size)?;
        let trailing_title = format!("📅 Last {} Days", dashboard.window_days);
        self.write_board(&trailing_title, &dashboard.trailing, dashboard.podium_size)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_directory(&mut self, rows: &[DirectoryRow], role: ViewerRole) -> anyhow::Result<()> {
        self.write_header(&format!("ALL GIVES ({})", rows.len()))?;
        if role == ViewerRole::Standard {
            let note = self.paint("Contact details are masked.", |s| s.dimmed());
            writeln!(self.writer, "{note}")?;
        }
        if rows.is_empty() {
            writeln!(self.writer, "No gives match the current filter.")?;
        } else {
            let mut table = new_table();
            table.set_header(vec!["Name", "Category", "City", "Member", "Email", "Phone"]);
            for row in rows {
                table.add_row(vec![
                    row.name.clone(),
                    row.category.label().to_string(),
                    row.city.clone().unwrap_or_else(|| "-".to_string()),
                    row.contributor.clone(),
                    row.contact.email.clone(),
                    row.contact.phone.clone(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_stats(
        &mut self,
        stats: &GiveStats,
        standing: Option<&MemberStanding>,
    ) -> anyhow::Result<()> {
        self.write_header("GIVE STATISTICS")?;
        let total = self.paint(&stats.total_gives.to_string(), |s| s.bold());
        let active = self.paint(&stats.active_gives.to_string(), |s| s.green());
        writeln!(self.writer, "Total gives:  {total}")?;
        writeln!(self.writer, "Active gives: {active}")?;

        if let Some(standing) = standing {
            self.write_standing(standing)?;
        }

        let busiest = stats.busiest_categories();
        if !busiest.is_empty() {
            let mut table = new_table();
            table.set_header(vec!["Category", "Active Gives"]);
            for (slug, count) in busiest {
                table.add_row(vec![
                    Category::from_slug(slug).label().to_string(),
                    count.to_string(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
