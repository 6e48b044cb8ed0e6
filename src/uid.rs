//! UID stables des évènements de garde.
//!
//! L'UID ne dépend que de (date, clé de rôle, nom) : une régénération produit
//! les mêmes UID et les clients de calendrier mettent à jour au lieu de dupliquer.
//! Le hash est tronqué à 10 caractères hexadécimaux (40 bits) : sans risque pour
//! quelques milliers de noms, à revoir au-delà.
//!
//! Les positions 1 et suivantes partagent la clé `E` et donc le même UID pour
//! une même personne le même jour.

use crate::role::SlotRole;
use chrono::NaiveDate;
use sha1::{Digest, Sha1};

pub const UID_DOMAIN: &str = "psy_duty";
const HASH_LEN: usize = 10;

/// Empreinte courte du nom (SHA-1, hex minuscule).
pub fn name_hash(name: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(name.as_bytes());
    let mut hex = hex::encode(hasher.finalize());
    hex.truncate(HASH_LEN);
    hex
}

pub fn duty_uid(date: NaiveDate, position: usize, name: &str) -> String {
    format!(
        "duty-{}-{}-{}@{UID_DOMAIN}",
        date.format("%Y%m%d"),
        SlotRole::at(position).uid_key(),
        name_hash(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn uid_shape() {
        let uid = duty_uid(day(2025, 1, 1), 0, "Kim");
        assert_eq!(uid, "duty-20250101-B-83db02e1cb@psy_duty");
        assert_eq!(
            duty_uid(day(2025, 1, 1), 1, "Kim"),
            "duty-20250101-E-83db02e1cb@psy_duty"
        );
    }

    #[test]
    fn hash_is_sha1_prefix() {
        // sha1("abc") = a9993e364706816aba3e25717850c26c9cd0d89d
        assert_eq!(name_hash("abc"), "a9993e3647");
        assert_eq!(name_hash("김철수").len(), 10);
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            duty_uid(day(2025, 6, 3), 1, "Lee"),
            duty_uid(day(2025, 6, 3), 1, "Lee")
        );
        assert_ne!(
            duty_uid(day(2025, 6, 3), 0, "Lee"),
            duty_uid(day(2025, 6, 3), 1, "Lee")
        );
    }

    #[test]
    fn second_and_third_slot_collide() {
        assert_eq!(
            duty_uid(day(2025, 6, 3), 1, "Lee"),
            duty_uid(day(2025, 6, 3), 2, "Lee")
        );
    }
}
