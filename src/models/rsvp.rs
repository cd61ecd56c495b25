use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{consts::rsvp_const::DEFAULT_SOURCE, utils::validator::validate_rfc3339};

/// Bounds are checked after trimming: call [`RsvpPayload::normalized`]
/// before `validate()`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RsvpPayload {
    #[validate(nested)]
    pub wedding: WeddingInfo,

    #[validate(nested)]
    pub rsvp: RsvpFields,

    #[serde(rename = "submittedAtISO")]
    #[validate(custom(function = validate_rfc3339))]
    pub submitted_at_iso: Option<String>,

    #[serde(default = "default_source")]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub source: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeddingInfo {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub groom: String,

    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub bride: String,

    // stored opaque, never parsed
    #[serde(rename = "dateISO")]
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub date_iso: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RsvpFields {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,

    // free-form on purpose, the frontend sends localized values
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub attending: String,

    #[validate(range(min = 1, max = 6, message = "must be between 1 and 6"))]
    pub guests: i32,

    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub diet: Option<String>,

    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub note: Option<String>,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl RsvpPayload {
    pub fn normalized(mut self) -> Self {
        self.wedding.groom = self.wedding.groom.trim().to_string();
        self.wedding.bride = self.wedding.bride.trim().to_string();
        self.wedding.date_iso = self.wedding.date_iso.trim().to_string();
        self.rsvp.name = self.rsvp.name.trim().to_string();
        self.rsvp.attending = self.rsvp.attending.trim().to_string();
        self.rsvp.diet = self.rsvp.diet.map(|s| s.trim().to_string());
        self.rsvp.note = self.rsvp.note.map(|s| s.trim().to_string());
        self.submitted_at_iso = self.submitted_at_iso.map(|s| s.trim().to_string());
        self.source = self.source.trim().to_string();
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub attending: String,
    pub guests: i32,
    pub diet: Option<String>,
    pub note: Option<String>,
    pub wedding_groom: String,
    pub wedding_bride: String,
    pub wedding_date_iso: String,
    pub source: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl NewRsvp {
    /// `payload` must already be normalized and validated.
    pub fn from_payload(
        payload: RsvpPayload,
        submitted_at: DateTime<Utc>,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        let RsvpPayload {
            wedding,
            rsvp,
            source,
            ..
        } = payload;

        Self {
            submitted_at,
            name: rsvp.name,
            attending: rsvp.attending,
            guests: rsvp.guests,
            diet: rsvp.diet.filter(|s| !s.is_empty()),
            note: rsvp.note.filter(|s| !s.is_empty()),
            wedding_groom: wedding.groom,
            wedding_bride: wedding.bride,
            wedding_date_iso: wedding.date_iso,
            source,
            ip,
            user_agent,
        }
    }
}
