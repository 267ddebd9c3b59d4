//! Query parameter extractors.

use serde::{Deserialize, Serialize};

use volhub_core::error::AppError;
use volhub_core::result::AppResult;
use volhub_core::types::id::VolunteerId;
use volhub_entity::role::Role;

/// Query parameters for the notification listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    /// Audience to list: `"admin"` or `"volunteer"`. Required.
    pub role: Option<String>,
    /// Limit to one volunteer's direct notifications.
    pub id: Option<i64>,
    /// Only return unread notifications (default: false).
    pub unread_only: Option<bool>,
}

impl NotificationQuery {
    /// Resolves the raw query into a typed filter.
    ///
    /// The role is required; its absence or an unknown value is a
    /// validation error.
    pub fn into_filter(self) -> AppResult<(Role, Option<VolunteerId>, bool)> {
        let role: Role = self
            .role
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::validation("Query parameter 'role' is required"))?
            .parse()?;

        Ok((
            role,
            self.id.map(VolunteerId::from),
            self.unread_only.unwrap_or(false),
        ))
    }
}

/// Query parameters for report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Output format: `"json"` (default) or `"csv"`.
    pub format: Option<String>,
}

impl ReportQuery {
    /// Whether CSV output was requested.
    pub fn is_csv(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("csv"))
    }
}
