use crate::core::leaderboard::{Leaderboard, TopStats};
use crate::core::policy::CutoffPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::summary::{Attendance, LogReceipt, ParticipantTotal, Stats};
use crate::store::{AuditEntry, LedgerRow, LedgerStore};
use crate::utils::duration;
use chrono::NaiveDateTime;

/// High-level business logic over the attendance ledger.
///
/// Holds no ledger state of its own: every query reads the whole table
/// through the store, every log appends exactly one row.
pub struct AttendanceEngine<S: LedgerStore> {
    store: S,
    policy: CutoffPolicy,
}

fn validate_name(name: &str) -> AppResult<&str> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(name)
}

/// Ledger rows minus the header.
fn body(rows: &[LedgerRow]) -> &[LedgerRow] {
    rows.get(1..).unwrap_or(&[])
}

impl<S: LedgerStore> AttendanceEngine<S> {
    pub fn new(store: S, policy: CutoffPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a visit for `name` at `now`.
    pub fn log(&mut self, name: &str, now: NaiveDateTime) -> AppResult<LogReceipt> {
        let name = validate_name(name)?;
        let minutes = self.policy.minutes_for(name, &now)?;

        let event = Event::new(name, now, minutes);
        self.store.open_or_create()?;
        self.store.append_row(&event.to_row())?;

        log::info!(
            "Logged {} for {} on {}",
            event.duration_str(),
            event.name,
            event.date_str()
        );
        self.audit("log", name, &format!("Logged {}", event.duration_str()));

        Ok(event)
    }

    /// Total time for one participant.
    pub fn attendance(&mut self, name: &str) -> AppResult<Attendance> {
        let name = validate_name(name)?;
        let rows = self.read_rows()?;

        let total: i64 = body(&rows)
            .iter()
            .filter(|r| r.name == name)
            .filter_map(parse_or_warn)
            .fold(0, i64::saturating_add);

        if total == 0 {
            Ok(Attendance::NoRecords)
        } else {
            Ok(Attendance::Total(total))
        }
    }

    /// Total time per participant, in first-seen order.
    pub fn stats(&mut self) -> AppResult<Stats> {
        let rows = self.read_rows()?;
        let mut totals: Vec<ParticipantTotal> = Vec::new();

        for row in body(&rows) {
            let Some(minutes) = parse_or_warn(row) else {
                continue;
            };
            match totals.iter_mut().find(|t| t.name == row.name) {
                Some(t) => t.minutes = t.minutes.saturating_add(minutes),
                None => totals.push(ParticipantTotal {
                    name: row.name.clone(),
                    minutes,
                }),
            }
        }

        if totals.is_empty() {
            Ok(Stats::NoData)
        } else {
            Ok(Stats::Totals(totals))
        }
    }

    /// Most hours, most visits and longest consecutive-day streak.
    pub fn top_stats(&mut self) -> AppResult<TopStats> {
        let rows = self.read_rows()?;
        Leaderboard::from_rows(body(&rows)).top()
    }

    /// Exact, case-sensitive name lookup.
    pub fn exists(&mut self, name: &str) -> AppResult<bool> {
        let name = validate_name(name)?;
        let rows = self.read_rows()?;
        Ok(body(&rows).iter().any(|r| r.name == name))
    }

    /// Erase every row and re-write the header. Irreversible.
    pub fn clear(&mut self) -> AppResult<()> {
        self.store.open_or_create()?;
        self.store.clear_and_reset_header()?;
        log::info!("Ledger cleared");
        self.audit("clear", "", "All attendance data cleared");
        Ok(())
    }

    /// Locator of the backing table.
    pub fn link(&mut self) -> AppResult<String> {
        self.store.open_or_create()?;
        Ok(self.store.identity_url())
    }

    /// Every row including the header, for export.
    pub fn rows(&mut self) -> AppResult<Vec<LedgerRow>> {
        self.read_rows()
    }

    pub fn audit_entries(&mut self) -> AppResult<Vec<AuditEntry>> {
        self.store.open_or_create()?;
        self.store.audit_entries()
    }

    /// Record an operation in the audit trail; failures only warn.
    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.audit(operation, target, message) {
            log::warn!("Failed to write audit entry for {}: {}", operation, e);
        }
    }

    fn read_rows(&mut self) -> AppResult<Vec<LedgerRow>> {
        self.store.open_or_create()?;
        self.store.read_all_rows()
    }
}

fn parse_or_warn(row: &LedgerRow) -> Option<i64> {
    match duration::parse_duration(&row.duration) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("{} for {}, row skipped", e, row.name);
            None
        }
    }
}
