//! Sélection des personnes de garde et écriture d'un calendrier par personne.

use crate::calendar::{build_person_calendar, CalendarOptions, GenerationStamp};
use crate::model::{PersonName, Roster};
use crate::storage::CalendarSink;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Résultat d'une génération.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Personnes du personnel ayant au moins une garde, dans l'ordre de la liste.
pub fn people_on_duty(roster: &Roster) -> Vec<PersonName> {
    roster
        .employees
        .iter()
        .map(|e| e.display_name())
        .filter(|name| {
            let on_duty = roster.has_duty(name.as_str());
            if !on_duty {
                debug!(person = %name, "no duty in schedule, skipped");
            }
            on_duty
        })
        .collect()
}

/// Nom de fichier : `/` et `\` remplacés par `_`.
pub fn safe_file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Génère et écrit un calendrier pour chaque personne de garde.
pub fn export_calendars(
    roster: &Roster,
    sink: &mut dyn CalendarSink,
    stamp: &GenerationStamp,
    opts: &CalendarOptions,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();
    for person in people_on_duty(roster) {
        let doc = build_person_calendar(roster, person.as_str(), stamp, opts)?;
        let path = sink.write(&safe_file_stem(person.as_str()), &doc.render())?;
        info!(person = %person, events = doc.events.len(), path = %path.display(), "calendar written");
        summary.written.push(path);
    }
    info!(count = summary.count(), "export finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DutyError;
    use crate::model::{DayEntry, DutySlot, Employee};
    use crate::storage::MemorySink;
    use chrono::{TimeZone, Utc};

    fn stamp() -> GenerationStamp {
        GenerationStamp::at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }

    fn roster(employees: &[&str], schedule: Vec<DayEntry>) -> Roster {
        Roster {
            employees: employees.iter().map(|e| Employee::Name(e.to_string())).collect(),
            schedule,
            holidays: Default::default(),
        }
    }

    #[test]
    fn stems_replace_separators() {
        assert_eq!(safe_file_stem("a/b\\c"), "a_b_c");
        assert_eq!(safe_file_stem("김철수"), "김철수");
    }

    #[test]
    fn people_without_duty_are_skipped() {
        let r = roster(
            &["Kim", "Lee", "Park"],
            vec![DayEntry::new(
                "2025-01-06",
                vec![Some(DutySlot::assigned("Park")), Some(DutySlot::assigned("Kim"))],
            )],
        );
        let names: Vec<String> = people_on_duty(&r).iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["Kim", "Park"]);

        let mut sink = MemorySink::default();
        let summary = export_calendars(&r, &mut sink, &stamp(), &CalendarOptions::default()).unwrap();
        assert_eq!(summary.count(), 2);
        assert_eq!(sink.files.keys().collect::<Vec<_>>(), vec!["Kim.ics", "Park.ics"]);
    }

    #[test]
    fn unknown_assignee_not_in_employees_gets_nothing() {
        let r = roster(
            &["Kim"],
            vec![DayEntry::new("2025-01-06", vec![Some(DutySlot::assigned("Ghost"))])],
        );
        let mut sink = MemorySink::default();
        let summary = export_calendars(&r, &mut sink, &stamp(), &CalendarOptions::default()).unwrap();
        assert_eq!(summary.count(), 0);
        assert!(sink.files.is_empty());
    }

    #[test]
    fn separator_in_name_is_sanitised() {
        let r = roster(
            &["A/B"],
            vec![DayEntry::new("2025-01-06", vec![Some(DutySlot::assigned("A/B"))])],
        );
        let mut sink = MemorySink::default();
        export_calendars(&r, &mut sink, &stamp(), &CalendarOptions::default()).unwrap();
        let ics = &sink.files["A_B.ics"];
        assert!(ics.contains("SUMMARY:병당 - A/B\r\n"));
    }

    #[test]
    fn invalid_date_fails_the_run() {
        let r = roster(
            &["Kim"],
            vec![
                DayEntry::new("2025-01-06", vec![Some(DutySlot::assigned("Kim"))]),
                DayEntry::new("2025/01/07", Vec::new()),
            ],
        );
        let mut sink = MemorySink::default();
        let err = export_calendars(&r, &mut sink, &stamp(), &CalendarOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DutyError>(),
            Some(DutyError::InvalidDate { .. })
        ));
    }
}
