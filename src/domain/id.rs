//! Record id generation.
//!
//! Every strategy receives the ids currently in the store (in list order)
//! and never returns one of them, whatever its primary rule produces.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::SEQUENTIAL_ID_WIDTH;

/// Who picks the id of a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdAssignment {
    /// The request must carry an `id`; duplicates are rejected
    Client,
    /// The server generates the id; any client-supplied `id` is ignored
    Server,
}

/// Produces the next record id.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, prefix: &str, existing: &[&str]) -> String;
}

/// Selectable id strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// prefix + zero-padded successor of the last record's numeric suffix
    Sequential,
    /// prefix + strictly increasing millisecond timestamp
    #[default]
    Timestamp,
    /// prefix + random token
    Random,
}

impl IdStrategy {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Arc::new(SequentialIds),
            IdStrategy::Timestamp => Arc::new(TimestampIds::new()),
            IdStrategy::Random => Arc::new(RandomIds),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "timestamp" => Ok(IdStrategy::Timestamp),
            "random" | "uuid" => Ok(IdStrategy::Random),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Sequential => write!(f, "sequential"),
            IdStrategy::Timestamp => write!(f, "timestamp"),
            IdStrategy::Random => write!(f, "random"),
        }
    }
}

/// `r001`, `r002`, ... following the last record in list order.
///
/// Deleting a record out of sequence would make the naive successor collide
/// with a surviving id, so the candidate keeps advancing until it is free.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIds;

impl IdGenerator for SequentialIds {
    fn next_id(&self, prefix: &str, existing: &[&str]) -> String {
        let taken: HashSet<&str> = existing.iter().copied().collect();
        let mut next = existing
            .last()
            .and_then(|id| id.strip_prefix(prefix))
            .and_then(|suffix| suffix.parse::<u64>().ok())
            .unwrap_or(0)
            + 1;

        loop {
            let candidate = format!("{}{:0width$}", prefix, next, width = SEQUENTIAL_ID_WIDTH);
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            next += 1;
        }
    }
}

/// prefix + epoch milliseconds, strictly increasing per generator.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(previous + 1)
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&self, prefix: &str, existing: &[&str]) -> String {
        let taken: HashSet<&str> = existing.iter().copied().collect();
        loop {
            let candidate = format!("{}{}", prefix, self.tick());
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }
}

/// prefix + random 32-hex-digit token.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self, prefix: &str, existing: &[&str]) -> String {
        loop {
            let candidate = format!("{}{}", prefix, Uuid::new_v4().simple());
            if !existing.contains(&candidate.as_str()) {
                return candidate;
            }
        }
    }
}
