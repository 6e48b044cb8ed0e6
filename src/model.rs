use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Nom affiché d'une personne. L'identité est l'égalité exacte de chaîne.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entrée de la liste du personnel : simple chaîne ou objet avec `name`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Employee {
    Name(String),
    Record(Map<String, Value>),
    Other(Value),
}

impl Employee {
    /// Résout le nom affiché ; à défaut de `name` textuel, la représentation JSON compacte.
    pub fn display_name(&self) -> PersonName {
        match self {
            Employee::Name(name) => PersonName::new(name.as_str()),
            Employee::Record(fields) => match fields.get("name") {
                Some(Value::String(name)) => PersonName::new(name.as_str()),
                _ => PersonName::new(Value::Object(fields.clone()).to_string()),
            },
            Employee::Other(value) => PersonName::new(value.to_string()),
        }
    }
}

/// Créneau de garde. Un créneau sans `name` textuel est vacant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DutySlot {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
}

impl DutySlot {
    pub fn assigned<S: Into<String>>(name: S) -> Self {
        Self { name: Some(name.into()) }
    }

    pub fn is_assigned_to(&self, person: &str) -> bool {
        self.name.as_deref() == Some(person)
    }
}

/// Journée du planning ; la position du créneau dans `duties` porte le rôle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DayEntry {
    #[serde(default)]
    pub date: Option<String>,
    /// Ancien champ de date des exports.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duties: Vec<Option<DutySlot>>,
}

impl DayEntry {
    pub fn new<S: Into<String>>(date: S, duties: Vec<Option<DutySlot>>) -> Self {
        Self {
            date: Some(date.into()),
            key: None,
            duties,
        }
    }

    /// Date brute utilisable (`date`, sinon `key`) ; `None` si absente ou vide.
    pub fn raw_date(&self) -> Option<&str> {
        [self.date.as_deref(), self.key.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }

    /// Créneaux occupés avec leur position.
    pub fn assigned_slots(&self) -> impl Iterator<Item = (usize, &DutySlot)> {
        self.duties
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|s| (idx, s)))
    }
}

/// Export complet du tableau de garde.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Roster {
    #[serde(default, deserialize_with = "null_as_default")]
    pub employees: Vec<Employee>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<DayEntry>,
    /// Les entrées non textuelles sont ignorées.
    #[serde(default, deserialize_with = "string_set")]
    pub holidays: HashSet<String>,
}

impl Roster {
    /// Vrai si `person` occupe au moins un créneau, quel que soit le jour.
    pub fn has_duty(&self, person: &str) -> bool {
        self.schedule
            .iter()
            .flat_map(|day| day.assigned_slots())
            .any(|(_, slot)| slot.is_assigned_to(person))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn string_set<'de, D>(deserializer: D) -> Result<HashSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = null_as_default(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}
