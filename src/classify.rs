//! Classification d'une journée : férié, week-end ou semaine.

use crate::error::DutyError;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Nature de la journée, par ordre de priorité décroissante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Holiday,
    Weekend,
    Weekday,
}

impl DayKind {
    pub fn label(self) -> &'static str {
        match self {
            DayKind::Holiday => "공휴일",
            DayKind::Weekend => "주말",
            DayKind::Weekday => "평일",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    pub date: NaiveDate,
    /// 0 = lundi .. 6 = dimanche
    pub weekday_index: u32,
    pub is_weekend: bool,
    pub kind: DayKind,
}

impl DayClass {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Les 10 premiers caractères (pas octets) de la date brute.
pub fn date_prefix(raw: &str) -> &str {
    match raw.char_indices().nth(10) {
        Some((end, _)) => &raw[..end],
        None => raw,
    }
}

/// Parse `YYYY-MM-DD` sur les 10 premiers caractères.
pub fn parse_day(raw: &str) -> Result<NaiveDate, DutyError> {
    let head = date_prefix(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|source| DutyError::InvalidDate {
        value: raw.to_string(),
        source,
    })
}

/// Classe une journée. Un jour férié l'emporte sur le week-end.
pub fn classify_day(raw: &str, holidays: &HashSet<String>) -> Result<DayClass, DutyError> {
    let date = parse_day(raw)?;
    let weekday_index = date.weekday().num_days_from_monday();
    let is_weekend = weekday_index >= 5;
    let kind = if holidays.contains(date_prefix(raw)) {
        DayKind::Holiday
    } else if is_weekend {
        DayKind::Weekend
    } else {
        DayKind::Weekday
    };
    Ok(DayClass {
        date,
        weekday_index,
        is_weekend,
        kind,
    })
}
