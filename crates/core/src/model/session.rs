use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire format for session timestamps sent to the booking endpoint.
pub const SESSION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const END_TIME_FORMAT: &str = "%H:%M";

const START_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];
const TIME_INPUT_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("a booking needs at least one session")]
    LastSession,

    #[error("no session at position {0}")]
    OutOfRange(usize),

    #[error("this package allows at most {max} sessions")]
    TooMany { max: usize },

    #[error("session {session} has an invalid start time: {raw:?}")]
    InvalidStart { session: usize, raw: String },

    #[error("session {session} has an invalid end time: {raw:?}")]
    InvalidEnd { session: usize, raw: String },
}

//
// ─── SLOTS ─────────────────────────────────────────────────────────────────────
//

/// One scheduled training slot as edited in the booking wizard.
///
/// `start_time` and `end_time` hold raw input values; they are normalized
/// only when the booking request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSlot {
    pub start_time: String,
    pub end_time: String,
    session_no: [u32; 2],
}

impl SessionSlot {
    fn empty(index: usize) -> Self {
        Self {
            start_time: String::new(),
            end_time: String::new(),
            session_no: session_numbers(index),
        }
    }

    /// Pair of package session numbers covered by this slot.
    #[must_use]
    pub fn session_no(&self) -> [u32; 2] {
        self.session_no
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Sessions {} & {}", self.session_no[0], self.session_no[1])
    }
}

/// Numbers for the slot at `index`: every slot covers two package sessions.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn session_numbers(index: usize) -> [u32; 2] {
    let base = (index as u32) * 2;
    [base + 1, base + 2]
}

/// Ordered, never-empty list of session slots.
///
/// Slot `i` is always numbered `[2i + 1, 2i + 2]`; removing a slot renumbers
/// the ones after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSchedule {
    slots: Vec<SessionSlot>,
    max_slots: Option<usize>,
}

impl Default for SessionSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![SessionSlot::empty(0)],
            max_slots: None,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[SessionSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn max_slots(&self) -> Option<usize> {
        self.max_slots
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        self.max_slots.is_none_or(|max| self.slots.len() < max)
    }

    /// Limit the schedule to what a package with `number_of_sessions` covers.
    ///
    /// Extra trailing slots are dropped; at least one slot always remains.
    pub fn limit_to_package(&mut self, number_of_sessions: u32) {
        let max = (number_of_sessions as usize).div_ceil(2).max(1);
        self.max_slots = Some(max);
        self.slots.truncate(max);
    }

    pub fn clear_limit(&mut self) {
        self.max_slots = None;
    }

    /// Append an empty slot.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::TooMany` when the package limit is reached.
    pub fn add(&mut self) -> Result<(), ScheduleError> {
        if let Some(max) = self.max_slots
            && self.slots.len() >= max
        {
            return Err(ScheduleError::TooMany { max });
        }
        self.slots.push(SessionSlot::empty(self.slots.len()));
        Ok(())
    }

    /// Remove the slot at `index` and renumber the rest.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::LastSession` when only one slot is left, or
    /// `ScheduleError::OutOfRange` for a bad index.
    pub fn remove(&mut self, index: usize) -> Result<(), ScheduleError> {
        if index >= self.slots.len() {
            return Err(ScheduleError::OutOfRange(index));
        }
        if self.slots.len() == 1 {
            return Err(ScheduleError::LastSession);
        }
        self.slots.remove(index);
        self.renumber();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ScheduleError::OutOfRange` for a bad index.
    pub fn set_start(&mut self, index: usize, raw: impl Into<String>) -> Result<(), ScheduleError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ScheduleError::OutOfRange(index))?;
        slot.start_time = raw.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ScheduleError::OutOfRange` for a bad index.
    pub fn set_end(&mut self, index: usize, raw: impl Into<String>) -> Result<(), ScheduleError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ScheduleError::OutOfRange(index))?;
        slot.end_time = raw.into();
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.session_no = session_numbers(index);
        }
    }

    /// Normalize every slot into its wire shape.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidStart`/`InvalidEnd` for the first slot
    /// whose times cannot be parsed.
    pub fn to_requests(&self) -> Result<Vec<SessionRequest>, ScheduleError> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SessionRequest::from_slot(index, slot))
            .collect()
    }
}

//
// ─── WIRE SHAPE ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub start_time: String,
    pub end_time: String,
    pub session_no: [u32; 2],
}

impl SessionRequest {
    fn from_slot(index: usize, slot: &SessionSlot) -> Result<Self, ScheduleError> {
        let session = index + 1;
        let start = parse_start(&slot.start_time).ok_or_else(|| ScheduleError::InvalidStart {
            session,
            raw: slot.start_time.clone(),
        })?;
        let end_time = normalize_end(&slot.end_time, start.date()).ok_or_else(|| {
            ScheduleError::InvalidEnd {
                session,
                raw: slot.end_time.clone(),
            }
        })?;
        Ok(Self {
            start_time: start.format(SESSION_TIME_FORMAT).to_string(),
            end_time,
            session_no: slot.session_no,
        })
    }
}

/// Parse a start timestamp from any of the accepted input shapes.
#[must_use]
pub fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    START_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Normalize an end value against the session's start date.
///
/// A bare time of day stays a bare `HH:mm`; a full timestamp keeps its time
/// but takes the start date.
#[must_use]
pub fn normalize_end(raw: &str, start_date: NaiveDate) -> Option<String> {
    let raw = raw.trim();
    if let Some(time) = TIME_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
    {
        return Some(time.format(END_TIME_FORMAT).to_string());
    }
    let end = parse_start(raw)?;
    Some(
        start_date
            .and_time(end.time())
            .format(SESSION_TIME_FORMAT)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_numbering(schedule: &SessionSchedule) {
        for (i, slot) in schedule.slots().iter().enumerate() {
            let i = u32::try_from(i).unwrap();
            assert_eq!(slot.session_no(), [2 * i + 1, 2 * i + 2]);
        }
    }

    #[test]
    fn new_schedule_has_one_slot_numbered_one_two() {
        let schedule = SessionSchedule::new();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.slots()[0].session_no(), [1, 2]);
    }

    #[test]
    fn numbering_holds_across_adds_and_removes() {
        let mut schedule = SessionSchedule::new();
        for _ in 0..5 {
            schedule.add().unwrap();
            assert_numbering(&schedule);
        }
        for index in [2, 0, 3, 1] {
            schedule.remove(index).unwrap();
            assert_numbering(&schedule);
        }
        schedule.add().unwrap();
        assert_numbering(&schedule);
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn removing_middle_slot_keeps_remaining_inputs() {
        let mut schedule = SessionSchedule::new();
        schedule.add().unwrap();
        schedule.add().unwrap();
        schedule.set_start(2, "2024-03-01T09:00").unwrap();
        schedule.remove(1).unwrap();
        assert_eq!(schedule.slots()[1].start_time, "2024-03-01T09:00");
        assert_eq!(schedule.slots()[1].session_no(), [3, 4]);
    }

    #[test]
    fn last_slot_cannot_be_removed() {
        let mut schedule = SessionSchedule::new();
        assert_eq!(schedule.remove(0), Err(ScheduleError::LastSession));
        assert_eq!(schedule.remove(4), Err(ScheduleError::OutOfRange(4)));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn package_limit_caps_slots() {
        let mut schedule = SessionSchedule::new();
        schedule.limit_to_package(3);
        assert_eq!(schedule.max_slots(), Some(2));
        schedule.add().unwrap();
        assert!(!schedule.can_add());
        assert_eq!(schedule.add(), Err(ScheduleError::TooMany { max: 2 }));

        schedule.limit_to_package(1);
        assert_eq!(schedule.len(), 1);
        assert_numbering(&schedule);
    }

    #[test]
    fn start_is_normalized_and_bare_end_time_is_kept() {
        let mut schedule = SessionSchedule::new();
        schedule.set_start(0, "2024-01-01T10:00").unwrap();
        schedule.set_end(0, "11:00").unwrap();
        let requests = schedule.to_requests().unwrap();
        assert_eq!(
            requests,
            vec![SessionRequest {
                start_time: "2024-01-01 10:00".into(),
                end_time: "11:00".into(),
                session_no: [1, 2],
            }]
        );
    }

    #[test]
    fn full_end_timestamp_takes_the_start_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(
            normalize_end("2024-05-09T12:30:45", date).as_deref(),
            Some("2024-05-02 12:30")
        );
    }

    #[test]
    fn missing_start_reports_session_number() {
        let mut schedule = SessionSchedule::new();
        schedule.add().unwrap();
        schedule.set_start(0, "2024-01-01 08:00").unwrap();
        schedule.set_end(0, "09:00").unwrap();
        let err = schedule.to_requests().unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidStart {
                session: 2,
                raw: String::new()
            }
        );
    }
}
