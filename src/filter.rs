use crate::types::{SessionKind, SessionRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Narrows a session list before any statistic is computed.
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsFilter {
    pub kind: Option<SessionKind>,
    /// Inclusive, from the start of the day.
    pub from: Option<NaiveDate>,
    /// Inclusive, through the end of the day.
    pub to: Option<NaiveDate>,
    pub discipline_id: Option<String>,
}

impl StatsFilter {
    pub fn matches(&self, session: &SessionRecord) -> bool {
        if self.kind.is_some_and(|kind| kind != session.kind) {
            return false;
        }
        if let Some(id) = &self.discipline_id {
            if session.discipline_id() != Some(id.as_str()) {
                return false;
            }
        }

        let day = session.date.date();
        if self.from.is_some_and(|from| day < from) {
            return false;
        }
        if self.to.is_some_and(|to| day > to) {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, sessions: &'a [SessionRecord]) -> Vec<&'a SessionRecord> {
        sessions.iter().filter(|s| self.matches(s)).collect()
    }
}
