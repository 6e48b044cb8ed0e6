use std::borrow::Cow;

/// Libellés des premières positions ; au-delà, `슬롯{n}`.
const ROLE_LABELS: [&str; 2] = ["병당", "응당"];

/// Rôle d'un créneau, déduit uniquement de sa position dans la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRole {
    position: usize,
}

impl SlotRole {
    pub fn at(position: usize) -> Self {
        Self { position }
    }

    pub fn position(self) -> usize {
        self.position
    }

    pub fn label(self) -> Cow<'static, str> {
        match ROLE_LABELS.get(self.position) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("슬롯{}", self.position + 1)),
        }
    }

    /// Clé de rôle de l'UID : `B` pour la garde de jour, `E` pour tout le reste.
    pub fn uid_key(self) -> &'static str {
        if self.position == 0 {
            "B"
        } else {
            "E"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_position() {
        assert_eq!(SlotRole::at(0).label(), "병당");
        assert_eq!(SlotRole::at(1).label(), "응당");
        assert_eq!(SlotRole::at(2).label(), "슬롯3");
        assert_eq!(SlotRole::at(9).label(), "슬롯10");
    }

    #[test]
    fn uid_key_only_splits_first_slot() {
        assert_eq!(SlotRole::at(0).uid_key(), "B");
        assert_eq!(SlotRole::at(1).uid_key(), "E");
        assert_eq!(SlotRole::at(2).uid_key(), "E");
    }
}
