//! Per-participant tallies and the global leaderboard.
//!
//! Rows are folded in ledger order. Streaks are computed over that order as
//! well: a row whose date is exactly one calendar day after the participant's
//! previous row extends the running streak, anything else (same day, a gap,
//! or a date earlier than the previous row) closes it and starts a new one.

use crate::errors::{AppError, AppResult};
use crate::store::LedgerRow;
use crate::utils::{duration, time};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// The winner of one leaderboard category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leader {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopStats {
    /// Most total minutes.
    pub top_hours: Leader,
    /// Most logged visits.
    pub top_visits: Leader,
    /// Longest run of consecutive calendar days.
    pub top_consecutive: Leader,
}

#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub name: String,
    pub total_minutes: i64,
    pub visits: i64,
    best_streak: i64,
    current_streak: i64,
    last_date: Option<NaiveDate>,
}

impl Tally {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn record_day(&mut self, date: NaiveDate) {
        match self.last_date {
            Some(last) if (date - last).num_days() == 1 => self.current_streak += 1,
            Some(_) => {
                self.best_streak = self.best_streak.max(self.current_streak);
                self.current_streak = 1;
            }
            None => self.current_streak = 1,
        }
        self.last_date = Some(date);
    }

    /// Longest streak seen so far, the still-open one included.
    pub fn best_streak(&self) -> i64 {
        self.best_streak.max(self.current_streak)
    }
}

/// Tallies keyed by name, kept in first-seen order.
#[derive(Debug, Default)]
pub struct Leaderboard {
    tallies: Vec<Tally>,
    index: HashMap<String, usize>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold raw ledger body rows.
    ///
    /// A malformed duration counts as a 0-minute visit; a malformed timestamp
    /// still counts the visit and its minutes but leaves the streak untouched.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a LedgerRow>,
    {
        let mut board = Self::new();

        for row in rows {
            let minutes = duration::parse_duration(&row.duration).unwrap_or_else(|e| {
                log::warn!("{} for {}, counting 0 minutes", e, row.name);
                0
            });

            let date = match time::parse_timestamp(&row.timestamp) {
                Ok(ts) => Some(ts.date()),
                Err(e) => {
                    log::warn!("{} for {}, streak not updated", e, row.name);
                    None
                }
            };

            board.record(&row.name, date, minutes);
        }

        board
    }

    pub fn record(&mut self, name: &str, date: Option<NaiveDate>, minutes: i64) {
        let idx = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.tallies.push(Tally::new(name));
                self.index.insert(name.to_string(), self.tallies.len() - 1);
                self.tallies.len() - 1
            }
        };

        let tally = &mut self.tallies[idx];
        tally.total_minutes = tally.total_minutes.saturating_add(minutes);
        tally.visits += 1;
        if let Some(d) = date {
            tally.record_day(d);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tally> {
        self.index.get(name).map(|&i| &self.tallies[i])
    }

    /// Winners of each category. Ties go to the participant seen first.
    pub fn top(&self) -> AppResult<TopStats> {
        Ok(TopStats {
            top_hours: self.leader_by(|t| t.total_minutes)?,
            top_visits: self.leader_by(|t| t.visits)?,
            top_consecutive: self.leader_by(Tally::best_streak)?,
        })
    }

    fn leader_by<F>(&self, metric: F) -> AppResult<Leader>
    where
        F: Fn(&Tally) -> i64,
    {
        let mut best: Option<Leader> = None;

        for tally in &self.tallies {
            let value = metric(tally);
            if best.as_ref().is_none_or(|b| value > b.value) {
                best = Some(Leader {
                    name: tally.name.clone(),
                    value,
                });
            }
        }

        best.ok_or(AppError::EmptyLedger)
    }
}
