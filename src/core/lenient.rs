//! Field deserializers for listing payloads.
//!
//! Every field of a give is read through one of these so a wrongly typed
//! value degrades to "absent" instead of rejecting the listing. Numbers are
//! accepted where text is expected; anything else is dropped with a debug log.

use super::{Category, Contributor, ContributorId, GiveId};
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

impl Loose {
    fn into_text(self, field: &str) -> Option<String> {
        match self {
            Loose::Text(s) => Some(s),
            Loose::Unsigned(n) => Some(n.to_string()),
            Loose::Signed(n) => Some(n.to_string()),
            Loose::Float(n) => Some(n.to_string()),
            Loose::Flag(_) | Loose::Other(_) => {
                debug!(field, "Ignoring non-text value");
                None
            }
        }
    }

    fn into_id(self, field: &str) -> Option<u64> {
        let id = match self {
            Loose::Unsigned(n) => Some(n),
            Loose::Text(ref s) => s.trim().parse().ok(),
            _ => None,
        };
        if id.is_none() {
            debug!(field, "Ignoring unusable id");
        }
        id
    }
}

fn loose<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Loose>, D::Error> {
    Option::<Loose>::deserialize(deserializer)
}

pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?.and_then(|v| v.into_text("text")))
}

pub(super) fn give_id<'de, D>(deserializer: D) -> Result<GiveId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?
        .and_then(|v| v.into_id("id"))
        .map(GiveId)
        .unwrap_or_default())
}

pub(super) fn contributor_id<'de, D>(deserializer: D) -> Result<Option<ContributorId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?
        .and_then(|v| v.into_id("user.id"))
        .map(ContributorId))
}

pub(super) fn category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?
        .and_then(|v| v.into_text("category"))
        .map(Category::from)
        .unwrap_or_default())
}

pub(super) fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match loose(deserializer)? {
        Some(Loose::Flag(active)) => Ok(active),
        None => Ok(true),
        Some(_) => {
            debug!("Ignoring non-boolean is_active");
            Ok(true)
        }
    }
}

pub(super) fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = loose(deserializer)?.and_then(|v| v.into_text("created_at"));
    Ok(raw.and_then(|s| match s.parse::<DateTime<Utc>>() {
        Ok(ts) => Some(ts),
        Err(e) => {
            debug!("Ignoring unparseable created_at {:?}: {}", s, e);
            None
        }
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseContributor {
    Embedded(Contributor),
    Id(u64),
    Other(IgnoredAny),
}

/// `user` may be the embedded member object or just its primary key.
pub(super) fn contributor<'de, D>(deserializer: D) -> Result<Option<Contributor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<LooseContributor>::deserialize(deserializer)? {
            Some(LooseContributor::Embedded(contributor)) => Some(contributor),
            Some(LooseContributor::Id(id)) => Some(Contributor {
                id: Some(ContributorId(id)),
                ..Default::default()
            }),
            Some(LooseContributor::Other(_)) => {
                debug!("Ignoring non-object user");
                None
            }
            None => None,
        },
    )
}
