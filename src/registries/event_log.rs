use crate::ports::EventPublisher;
use crate::{ShowroomError, ShowroomEvent};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// One published event together with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event: ShowroomEvent,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory [`EventPublisher`] keeping timestamped history.
///
/// The history sits behind a mutex so one log can back a shared showroom;
/// a poisoned lock still yields the records written so far.
pub struct EventLog {
    records: Mutex<Vec<EventRecord>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Returns timestamped records, oldest first. With a limit, only the
    /// most recent `limit` records are returned.
    pub fn records(&self, limit: Option<usize>) -> Vec<EventRecord> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match limit {
            Some(limit) => {
                let start = records.len().saturating_sub(limit);
                records[start..].to_vec()
            }
            None => records.clone(),
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for EventLog {
    fn publish(&self, event: ShowroomEvent) -> Result<(), ShowroomError> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        records.push(EventRecord {
            event,
            recorded_at: Utc::now(),
        });

        Ok(())
    }

    fn event_history(&self, limit: Option<usize>) -> Result<Vec<ShowroomEvent>, ShowroomError> {
        Ok(self
            .records(limit)
            .into_iter()
            .map(|record| record.event)
            .collect())
    }

    fn clear_event_history(&self) -> Result<(), ShowroomError> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FurnitureFamily;

    #[test]
    fn test_publish_appends_to_history() {
        let log = EventLog::new();

        log.publish(ShowroomEvent::FamilySelected {
            family: FurnitureFamily::Modern,
        })
        .unwrap();
        log.publish(ShowroomEvent::FamilySelected {
            family: FurnitureFamily::Victorian,
        })
        .unwrap();

        let history = log.event_history(None).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[0],
            ShowroomEvent::FamilySelected {
                family: FurnitureFamily::Modern
            }
        );
    }

    #[test]
    fn test_history_limit_returns_most_recent() {
        let log = EventLog::new();

        for family in [
            FurnitureFamily::Modern,
            FurnitureFamily::Victorian,
            FurnitureFamily::Modern,
        ] {
            log.publish(ShowroomEvent::FamilySelected { family }).unwrap();
        }

        let history = log.event_history(Some(1)).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(
            history[0],
            ShowroomEvent::FamilySelected {
                family: FurnitureFamily::Modern
            }
        );
    }

    #[test]
    fn test_clear_event_history() {
        let log = EventLog::new();

        log.publish(ShowroomEvent::FamilySelected {
            family: FurnitureFamily::Modern,
        })
        .unwrap();
        log.clear_event_history().unwrap();

        assert!(log.event_history(None).unwrap().is_empty());
    }

    #[test]
    fn test_records_carry_timestamps() {
        let log = EventLog::new();

        log.publish(ShowroomEvent::FamilySelected {
            family: FurnitureFamily::Modern,
        })
        .unwrap();

        let records = log.records(None);
        assert_eq!(records.len(), 1);
        assert!(records[0].recorded_at <= Utc::now());
    }
}
