//! Irreversible redaction of contact strings.
//!
//! All functions are total: empty input never panics and lengths are counted
//! in characters, so multi-byte input is never split mid-character.

use serde::{Deserialize, Serialize};

const REDACTED_DOMAIN: &str = "****";
const PHONE_SUFFIX: &str = "****";
const PHONE_PREFIX_CHARS: usize = 2;

const PARTIAL_EMPTY_EMAIL: &str = "***@***.com";
const PARTIAL_PHONE_PREFIX: &str = "***-***-";
const PARTIAL_EMPTY_PHONE: &str = "***-***-****";
const PARTIAL_PHONE_TAIL_CHARS: usize = 4;

/// How much of a contact string survives masking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskStyle {
    /// Directory listing style: nothing of the local part or domain survives.
    #[default]
    Directory,
    /// Keeps the first and last character of the local part, the domain, and
    /// the last four digits of a phone.
    Partial,
}

impl MaskStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "directory" => Some(Self::Directory),
            "partial" => Some(Self::Partial),
            _ => None,
        }
    }

    pub fn mask_email(&self, email: &str) -> String {
        match self {
            MaskStyle::Directory => mask_email(email),
            MaskStyle::Partial => mask_email_partial(email),
        }
    }

    pub fn mask_phone(&self, phone: &str) -> String {
        match self {
            MaskStyle::Directory => mask_phone(phone),
            MaskStyle::Partial => mask_phone_partial(phone),
        }
    }
}

fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// `abcdef@example.com` → `******@****`.
///
/// One star per character of the local part; local parts shorter than
/// three characters collapse to `*@****`.
pub fn mask_email(email: &str) -> String {
    if email.is_empty() {
        return String::new();
    }

    let local_len = local_part(email).chars().count();
    if local_len < 3 {
        return format!("*@{REDACTED_DOMAIN}");
    }
    format!("*{}*@{REDACTED_DOMAIN}", "*".repeat(local_len - 2))
}

/// `9876543210` → `98****`. No length validation.
pub fn mask_phone(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }

    let prefix: String = phone.chars().take(PHONE_PREFIX_CHARS).collect();
    format!("{prefix}{PHONE_SUFFIX}")
}

/// `johnny@example.com` → `j****y@example.com`.
pub fn mask_email_partial(email: &str) -> String {
    if email.is_empty() {
        return PARTIAL_EMPTY_EMAIL.to_string();
    }

    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };

    let chars: Vec<char> = local.chars().collect();
    let masked_local = match chars.as_slice() {
        [first, middle @ .., last] if !middle.is_empty() => {
            format!("{first}{}{last}", "*".repeat(middle.len()))
        }
        _ => local.to_string(),
    };

    match domain {
        Some(domain) => format!("{masked_local}@{domain}"),
        None => masked_local,
    }
}

/// `9876543210` → `***-***-3210`.
pub fn mask_phone_partial(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < PARTIAL_PHONE_TAIL_CHARS {
        return PARTIAL_EMPTY_PHONE.to_string();
    }

    let tail: String = chars[chars.len() - PARTIAL_PHONE_TAIL_CHARS..].iter().collect();
    format!("{PARTIAL_PHONE_PREFIX}{tail}")
}
