use crate::classify::DayClass;
use crate::error::DutyError;
use crate::escape::escape_text;
use crate::model::DayEntry;
use crate::role::SlotRole;
use crate::uid::duty_uid;
use chrono::NaiveDate;

/// Évènement « journée entière » d'une garde. `summary` et `description` sont déjà échappés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub uid: String,
    pub start: NaiveDate,
    /// Exclusive : lendemain de `start`.
    pub end: NaiveDate,
    pub summary: String,
    pub description: String,
}

impl EventRecord {
    /// Lignes `BEGIN:VEVENT` .. `END:VEVENT` avec l'horodatage partagé du run.
    pub fn to_lines(&self, dtstamp: &str) -> [String; 8] {
        [
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", self.uid),
            format!("DTSTAMP:{dtstamp}"),
            format!("DTSTART;VALUE=DATE:{}", self.start.format("%Y%m%d")),
            format!("DTEND;VALUE=DATE:{}", self.end.format("%Y%m%d")),
            format!("SUMMARY:{}", self.summary),
            format!("DESCRIPTION:{}", self.description),
            "END:VEVENT".to_string(),
        ]
    }
}

/// Évènements de `person` pour une journée déjà classée, dans l'ordre des créneaux.
pub fn events_for_day(
    day: &DayEntry,
    class: &DayClass,
    person: &str,
) -> Result<Vec<EventRecord>, DutyError> {
    let start = class.date;
    let end = start
        .succ_opt()
        .ok_or_else(|| DutyError::DateOverflow(start.to_string()))?;
    let description = escape_text(&format!("{} {}", start.format("%Y-%m-%d"), class.label()));

    let events = day
        .assigned_slots()
        .filter(|(_, slot)| slot.is_assigned_to(person))
        .map(|(idx, _)| EventRecord {
            uid: duty_uid(start, idx, person),
            start,
            end,
            summary: escape_text(&format!("{} - {person}", SlotRole::at(idx).label())),
            description: description.clone(),
        })
        .collect();
    Ok(events)
}
