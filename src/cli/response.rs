//! JSON payloads printed by the CLI. Every command yields exactly one
//! `Response`; failures become `{ "error": message }`.

use crate::config::Config;
use crate::core::leaderboard::TopStats;
use crate::errors::AppError;
use crate::models::event::Event;
use crate::models::summary::{Attendance, ParticipantTotal, Stats};
use crate::store::AuditEntry;
use crate::utils::format_minutes;
use serde::{Serialize, Serializer};

pub const NO_RECORDS: &str = "No attendance records found for this name.";
pub const NO_DATA: &str = "No attendance data available.";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Logged {
        duration: String,
        date: String,
    },
    Attendance {
        name: String,
        total: String,
    },
    NoRecords {
        name: String,
        message: String,
    },
    Stats {
        stats: StatsPayload,
    },
    Top {
        top_hours: HoursLeader,
        top_visits: VisitsLeader,
        top_consecutive: DaysLeader,
    },
    NoTopData {
        top: String,
    },
    Exists {
        exists: bool,
    },
    Status {
        status: String,
        message: String,
    },
    Link {
        link: String,
    },
    Exported {
        status: String,
        file: String,
        rows: usize,
    },
    Backup {
        status: String,
        file: String,
    },
    Initialized {
        status: String,
        config: String,
        database: String,
    },
    Config {
        config: Config,
    },
    Audit {
        audit: Vec<AuditEntry>,
    },
    Error {
        error: String,
    },
}

/// Either the per-name totals (as an ordered JSON object) or a message.
#[derive(Debug)]
pub enum StatsPayload {
    Totals(Vec<ParticipantTotal>),
    Message(String),
}

impl Serialize for StatsPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatsPayload::Totals(totals) => serializer.collect_map(
                totals
                    .iter()
                    .map(|t| (t.name.as_str(), format_minutes(t.minutes))),
            ),
            StatsPayload::Message(msg) => serializer.serialize_str(msg),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HoursLeader {
    pub name: String,
    pub hours: String,
}

#[derive(Debug, Serialize)]
pub struct VisitsLeader {
    pub name: String,
    pub visits: i64,
}

#[derive(Debug, Serialize)]
pub struct DaysLeader {
    pub name: String,
    pub days: i64,
}

impl Response {
    pub fn logged(event: &Event) -> Self {
        Response::Logged {
            duration: event.duration_str(),
            date: event.date_str(),
        }
    }

    pub fn attendance(name: &str, attendance: Attendance) -> Self {
        match attendance {
            Attendance::Total(minutes) => Response::Attendance {
                name: name.to_string(),
                total: format_minutes(minutes),
            },
            Attendance::NoRecords => Response::NoRecords {
                name: name.to_string(),
                message: NO_RECORDS.to_string(),
            },
        }
    }

    pub fn stats(stats: Stats) -> Self {
        let stats = match stats {
            Stats::Totals(totals) => StatsPayload::Totals(totals),
            Stats::NoData => StatsPayload::Message(NO_DATA.to_string()),
        };
        Response::Stats { stats }
    }

    pub fn top(top: TopStats) -> Self {
        Response::Top {
            top_hours: HoursLeader {
                name: top.top_hours.name,
                hours: format_minutes(top.top_hours.value),
            },
            top_visits: VisitsLeader {
                name: top.top_visits.name,
                visits: top.top_visits.value,
            },
            top_consecutive: DaysLeader {
                name: top.top_consecutive.name,
                days: top.top_consecutive.value,
            },
        }
    }

    pub fn no_top_data() -> Self {
        Response::NoTopData {
            top: NO_DATA.to_string(),
        }
    }

    pub fn status(status: &str, message: impl Into<String>) -> Self {
        Response::Status {
            status: status.to_string(),
            message: message.into(),
        }
    }

    pub fn error(err: &AppError) -> Self {
        Response::Error {
            error: err.to_string(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> String {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.unwrap_or_else(|e| {
            format!(
                "{{\"error\":{}}}",
                serde_json::Value::String(format!("JSON error: {}", e))
            )
        })
    }
}
