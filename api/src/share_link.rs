//! The link the recipient uses to return a test transfer.

use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// How long a share link stays valid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum LinkExpiry {
    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    Hours24,
    #[serde(rename = "48h")]
    #[strum(serialize = "48h")]
    Hours48,
    #[serde(rename = "72h")]
    #[strum(serialize = "72h")]
    Hours72,
    #[serde(rename = "1w")]
    #[strum(serialize = "1w")]
    OneWeek,
}

impl LinkExpiry {
    pub fn hours(&self) -> i64 {
        match self {
            Self::Hours24 => 24,
            Self::Hours48 => 48,
            Self::Hours72 => 72,
            Self::OneWeek => 168,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hours24 => "24 hours",
            Self::Hours48 => "48 hours",
            Self::Hours72 => "72 hours",
            Self::OneWeek => "1 week",
        }
    }

    pub fn duration(&self) -> TimeDelta {
        TimeDelta::hours(self.hours())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    url: String,
    token: String,
    created_at: DateTime<Utc>,
    expiry: Option<LinkExpiry>,
}

impl ShareLink {
    /// Builds `{base}/test/{token}`. A trailing slash on `base` is ignored.
    pub fn new(base: &str, token: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let token = token.into();
        Self {
            url: format!("{}/test/{}", base.trim_end_matches('/'), token),
            token,
            created_at,
            expiry: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expiry(&self) -> Option<LinkExpiry> {
        self.expiry
    }

    pub fn set_expiry(&mut self, expiry: Option<LinkExpiry>) {
        self.expiry = expiry;
    }

    /// `None` while no expiry is chosen.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiry.map(|e| self.created_at + e.duration())
    }
}

/// Progress of generating a share link.
///
/// Follows the backend result alone. Clearing the error messages of a failed
/// attempt leaves it `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Creating,
    Failed,
    Ready,
}

impl LinkStatus {
    pub fn of<E>(result: Option<&Result<ShareLink, E>>) -> Self {
        match result {
            None => Self::Creating,
            Some(Ok(_)) => Self::Ready,
            Some(Err(_)) => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn url_joins_base_and_token() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let link = ShareLink::new("https://dexter.com/", "abc123xyz789", now);
        assert_eq!(link.url(), "https://dexter.com/test/abc123xyz789");
        assert_eq!(link.expires_at(), None);
    }

    #[test]
    fn expiry_counts_from_creation() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut link = ShareLink::new("https://dexter.com", "t", now);
        link.set_expiry(Some(LinkExpiry::OneWeek));
        assert_eq!(
            link.expires_at(),
            Some(Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn expiry_uses_short_codes() {
        assert_eq!(LinkExpiry::from_str("72H").unwrap(), LinkExpiry::Hours72);
        assert_eq!(serde_json::to_string(&LinkExpiry::OneWeek).unwrap(), "\"1w\"");
        assert_eq!(LinkExpiry::Hours48.label(), "48 hours");
    }

    #[test]
    fn failed_creation_stays_failed_until_a_new_result_arrives() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let failed: Result<ShareLink, &str> = Err("backend unavailable");
        assert_eq!(LinkStatus::of(Some(&failed)), LinkStatus::Failed);
        assert_eq!(LinkStatus::of::<&str>(None), LinkStatus::Creating);

        let created: Result<ShareLink, &str> =
            Ok(ShareLink::new("https://dexter.com", "t", now));
        assert_eq!(LinkStatus::of(Some(&created)), LinkStatus::Ready);
    }
}
