use super::OutputTarget;
use crate::config::GivebankConfig;
use crate::core::{Category, ViewerRole};
use crate::directory::{list_directory, DirectoryFilter};
use crate::io::records::load_records;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct DirectoryCommand {
    pub file: PathBuf,
    pub role: ViewerRole,
    pub search: String,
    pub category: Option<String>,
    pub include_inactive: bool,
    pub target: OutputTarget,
}

impl DirectoryCommand {
    fn filter(&self) -> DirectoryFilter {
        DirectoryFilter {
            search: self.search.clone(),
            category: self.category.as_deref().map(parse_category),
            include_inactive: self.include_inactive,
        }
    }
}

fn parse_category(slug: &str) -> Category {
    let category = Category::from_slug(slug);
    if !category.is_known() {
        warn!(category = slug, "Unknown category; only exact matches will be listed");
    }
    category
}

pub fn handle_directory(command: DirectoryCommand, config: &GivebankConfig) -> Result<()> {
    let records = load_records(&command.file)
        .with_context(|| format!("Failed to load gives from {}", command.file.display()))?;

    let rows = list_directory(&records, &command.filter(), command.role, config.mask_style());
    info!(
        listed = rows.len(),
        total = records.len(),
        role = %command.role,
        "Directory ready"
    );

    let mut writer = command.target.open(config)?;
    writer.write_directory(&rows, command.role)
}
