use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Attributes that count double when scoring compatibility
pub const PRIMARY_ATTRIBUTES: [&str; 5] = ["clean", "budget", "social", "study", "sleep"];

/// Weight of a primary attribute
pub const PRIMARY_WEIGHT: u32 = 2;

/// Weight of every other attribute
pub const DEFAULT_WEIGHT: u32 = 1;

/// A single profile answer
///
/// `Null` is a present value: it only equals another `Null`. A key that is
/// missing from the record is the "absent" case and never reaches comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
    Null,
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

/// One person's answers, keyed by attribute name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeRecord(BTreeMap<String, AttributeValue>);

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures and seeding
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeRecord
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Attribute weighting policy
///
/// Primary attributes get `primary_weight`, everything else `default_weight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    pub primary_attributes: BTreeSet<String>,
    pub primary_weight: u32,
    pub default_weight: u32,
}

impl WeightTable {
    pub fn new<I, S>(primary_attributes: I, primary_weight: u32, default_weight: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            primary_attributes: primary_attributes.into_iter().map(Into::into).collect(),
            primary_weight,
            default_weight,
        }
    }

    #[inline]
    pub fn is_primary(&self, key: &str) -> bool {
        self.primary_attributes.contains(key)
    }

    #[inline]
    pub fn weight(&self, key: &str) -> u32 {
        if self.is_primary(key) {
            self.primary_weight
        } else {
            self.default_weight
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new(PRIMARY_ATTRIBUTES, PRIMARY_WEIGHT, DEFAULT_WEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealbreakerParseError {
    #[error("dealbreaker {0:?} is not of the form attribute:value")]
    MissingSeparator(String),

    #[error("dealbreaker {0:?} has an empty attribute or value")]
    EmptyPart(String),
}

/// An `attribute:value` pair that rules a candidate out, e.g. `clean:poor`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dealbreaker {
    pub attribute: String,
    pub value: String,
}

impl Dealbreaker {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// True when the record's attribute is exactly this text value
    pub fn rules_out(&self, record: &AttributeRecord) -> bool {
        record
            .get(&self.attribute)
            .and_then(AttributeValue::as_text)
            .is_some_and(|v| v == self.value)
    }
}

impl FromStr for Dealbreaker {
    type Err = DealbreakerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (attribute, value) = s
            .split_once(':')
            .ok_or_else(|| DealbreakerParseError::MissingSeparator(s.to_string()))?;

        if attribute.is_empty() || value.is_empty() {
            return Err(DealbreakerParseError::EmptyPart(s.to_string()));
        }

        Ok(Self::new(attribute, value))
    }
}

impl TryFrom<String> for Dealbreaker {
    type Error = DealbreakerParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dealbreaker> for String {
    fn from(value: Dealbreaker) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Dealbreaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.attribute, self.value)
    }
}

/// A stored roommate profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: AttributeRecord,
    #[serde(default)]
    pub dealbreakers: Vec<Dealbreaker>,
}

impl ProfileRecord {
    pub fn new(id: i64, user_id: i64, attributes: AttributeRecord) -> Self {
        Self {
            id,
            user_id,
            name: None,
            description: None,
            attributes,
            dealbreakers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_dealbreakers(mut self, dealbreakers: Vec<Dealbreaker>) -> Self {
        self.dealbreakers = dealbreakers;
        self
    }
}

/// Browse-page narrowing of the profile list
///
/// Every field left unset lets all profiles through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryFilter {
    /// Case-insensitive substring of the name or description
    #[serde(default)]
    pub search: Option<String>,
    /// Exact budget
    #[serde(default)]
    pub budget: Option<f64>,
    /// Substring of the social style, case-sensitive
    #[serde(default)]
    pub social: Option<String>,
}

impl DirectoryFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.budget.is_none() && self.social.is_none()
    }
}

/// Scored candidate, recomputed on every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate_id: i64,
    pub owner_id: i64,
    pub display_name: Option<String>,
    pub score: u8,
}
