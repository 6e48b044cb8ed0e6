//! Assemblage d'un VCALENDAR complet pour une personne.

use crate::classify::classify_day;
use crate::error::DutyError;
use crate::escape::escape_text;
use crate::event::{events_for_day, EventRecord};
use crate::fold::fold_line;
use crate::model::Roster;
use chrono::{DateTime, Utc};
use tracing::debug;

pub const CALENDAR_HEADER: [&str; 5] = [
    "BEGIN:VCALENDAR",
    "VERSION:2.0",
    "CALSCALE:GREGORIAN",
    "PRODID:-//psy_duty//Duty Roster//KO",
    "METHOD:PUBLISH",
];
pub const CALENDAR_FOOTER: [&str; 1] = ["END:VCALENDAR"];

/// Options de rendu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Préfixe de `X-WR-CALNAME`, suivi du nom entre parenthèses.
    pub title: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            title: "Psy Duty".to_string(),
        }
    }
}

/// Horodatage `DTSTAMP` calculé une fois par génération et partagé par tous les évènements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStamp(String);

impl GenerationStamp {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(now.format("%Y%m%dT%H%M%SZ").to_string())
    }
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    pub person: String,
    /// Valeur échappée de `X-WR-CALNAME`.
    pub calendar_name: String,
    pub stamp: GenerationStamp,
    pub events: Vec<EventRecord>,
}

impl CalendarDocument {
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = CALENDAR_HEADER.iter().map(|l| l.to_string()).collect();
        lines.push(format!("X-WR-CALNAME:{}", self.calendar_name));
        for event in &self.events {
            lines.extend(event.to_lines(self.stamp.as_str()));
        }
        lines.extend(CALENDAR_FOOTER.iter().map(|l| l.to_string()));
        lines
    }

    /// Texte iCalendar : lignes pliées à 75 octets, chacune terminée par CRLF.
    pub fn render(&self) -> String {
        self.lines().iter().map(|line| fold_line(line)).collect()
    }
}

/// Construit le calendrier de `person` en parcourant tout le planning dans l'ordre.
///
/// Une journée sans date est ignorée ; une date illisible interrompt la génération.
pub fn build_person_calendar(
    roster: &Roster,
    person: &str,
    stamp: &GenerationStamp,
    opts: &CalendarOptions,
) -> Result<CalendarDocument, DutyError> {
    let mut events = Vec::new();
    for (pos, day) in roster.schedule.iter().enumerate() {
        let Some(raw) = day.raw_date() else {
            debug!(position = pos, "schedule entry without date, skipped");
            continue;
        };
        let class = classify_day(raw, &roster.holidays)?;
        events.extend(events_for_day(day, &class, person)?);
    }

    Ok(CalendarDocument {
        person: person.to_string(),
        calendar_name: escape_text(&format!("{} ({person})", opts.title)),
        stamp: stamp.clone(),
        events,
    })
}
