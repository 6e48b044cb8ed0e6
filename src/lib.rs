#![forbid(unsafe_code)]
//! psy-duty-ics — un calendrier iCalendar (RFC 5545) par personne à partir
//! de l'export JSON du tableau de garde.
//!
//! - Évènements « journée entière » (`VALUE=DATE`, fin exclusive).
//! - UID déterministes : une régénération ne duplique rien côté client.
//! - Classement des jours : férié > week-end > semaine.
//! - Aucun fichier pour une personne sans garde.

pub mod calendar;
pub mod classify;
pub mod error;
pub mod escape;
pub mod event;
pub mod export;
pub mod fold;
pub mod model;
pub mod role;
#[cfg(feature = "serve")]
pub mod serve;
pub mod storage;
pub mod uid;

pub use calendar::{build_person_calendar, CalendarDocument, CalendarOptions, GenerationStamp};
pub use classify::{classify_day, DayClass, DayKind};
pub use error::DutyError;
pub use escape::escape_text;
pub use event::{events_for_day, EventRecord};
pub use export::{export_calendars, people_on_duty, safe_file_stem, ExportSummary};
pub use model::{DayEntry, DutySlot, Employee, PersonName, Roster};
pub use role::SlotRole;
pub use storage::{load_roster, CalendarSink, DirectorySink, MemorySink};
pub use uid::duty_uid;
