//! Role-based contact disclosure.
//!
//! [`resolve_contact_visibility`] is the single choke point every listing
//! goes through before showing contact fields of a give. Owners get no
//! special treatment there; the owner-facing "reveal contact" action is a
//! separate path, [`reveal_creator_contact`], gated on ownership.

pub mod mask;

pub use mask::{mask_email, mask_email_partial, mask_phone, mask_phone_partial, MaskStyle};

use crate::core::{Error, ReferralRecord, Result, Viewer, ViewerRole};
use serde::{Deserialize, Serialize};

/// Contact fields as they may be shown to a particular viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    pub email: String,
    pub phone: String,
}

/// Elevated viewers see raw contact fields; everyone else sees the
/// directory masks.
pub fn resolve_contact_visibility(record: &ReferralRecord, role: ViewerRole) -> ContactView {
    resolve_contact_visibility_with(record, role, MaskStyle::Directory)
}

pub fn resolve_contact_visibility_with(
    record: &ReferralRecord,
    role: ViewerRole,
    style: MaskStyle,
) -> ContactView {
    match role {
        ViewerRole::Elevated => ContactView {
            email: record.email().to_string(),
            phone: record.phone().to_string(),
        },
        ViewerRole::Standard => ContactView {
            email: style.mask_email(record.email()),
            phone: style.mask_phone(record.phone()),
        },
    }
}

/// How to reach the member who created a give.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorContact {
    pub mobile: String,
    pub whatsapp: String,
    pub email: String,
}

/// Owner-facing reveal of the creator's own contact details.
///
/// Only the give's author or an elevated viewer may call this, and only for
/// active gives. The result is still partially masked.
pub fn reveal_creator_contact(record: &ReferralRecord, viewer: &Viewer) -> Result<CreatorContact> {
    if !record.is_active {
        return Err(Error::NotFound(record.id));
    }
    if !viewer.is_elevated() && !viewer.owns(record) {
        return Err(Error::forbidden(viewer.id, record.id));
    }

    let creator = record.contributor.clone().unwrap_or_default();
    let mobile = mask_phone_partial(creator.mobile.as_deref().unwrap_or(""));

    Ok(CreatorContact {
        whatsapp: mobile.clone(),
        mobile,
        email: mask_email_partial(creator.email.as_deref().unwrap_or("")),
    })
}
