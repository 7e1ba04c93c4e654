use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Number, Value};

use crate::error::{ChangedAreasError, Result};

use super::validation::{ValidationReport, validate};

/// Collection key for the flat, single rule-set form (`files:`).
pub const DEFAULT_AREA: &str = "__default__";

/// Largest float that still holds every smaller integer exactly (2^53).
pub(crate) const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Matching rules for one area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct AreaRuleSet {
    /// Glob patterns; a file must match at least one.
    pub include: Vec<String>,

    /// Glob patterns that remove a file even when included.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Allowed extensions, dot-prefixed (e.g. `.ts`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_extensions: Vec<String>,

    /// Fewer matched files than this reports the area as unchanged.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_whole_number"
    )]
    pub min_changed_files: Option<usize>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_binary_files: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore_deleted_files: bool,

    /// Only renames without line changes are ignored.
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore_renamed_files: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Accepts `2` and `2.0` alike; YAML and JSON writers often emit the latter.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_whole_number<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let whole = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= MAX_EXACT_FLOAT)
            .map(|n| n as u64)
    });
    whole
        .and_then(|n| usize::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("expected a whole number, got {number}")))
}

impl AreaRuleSet {
    #[must_use]
    pub fn new<I, S>(include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Area name to rule-set, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSetCollection(IndexMap<String, AreaRuleSet>);

impl RuleSetCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the collection from a configuration document.
    ///
    /// `areas` entries keep their names; a flat `files` rule-set is stored
    /// under [`DEFAULT_AREA`]. The document should already have passed
    /// [`validate`].
    ///
    /// # Errors
    /// Returns an error if the document has no rule-sets, uses the reserved
    /// area name, or an area does not have the expected shape.
    pub fn from_document(document: &Value) -> Result<Self> {
        let root = document.as_object().ok_or_else(|| {
            ChangedAreasError::Config("Configuration must be a mapping".to_string())
        })?;

        let mut collection = Self::new();
        if let Some(areas) = root.get("areas").and_then(Value::as_object) {
            for (name, value) in areas {
                if name == DEFAULT_AREA {
                    return Err(ChangedAreasError::Config(format!(
                        "Area name \"{DEFAULT_AREA}\" is reserved"
                    )));
                }
                collection.insert(name.clone(), parse_area(name, value)?);
            }
        }
        if let Some(files) = root.get("files") {
            collection.insert(DEFAULT_AREA.to_string(), parse_area("files", files)?);
        }

        if collection.is_empty() {
            return Err(ChangedAreasError::Config(
                "Configuration must contain at least one of: \"areas\" or \"files\"".to_string(),
            ));
        }
        Ok(collection)
    }

    /// Render the collection back into document form.
    ///
    /// # Errors
    /// Returns an error if a rule-set cannot be serialized.
    pub fn to_document(&self) -> Result<Value> {
        let mut areas = Map::new();
        let mut root = Map::new();
        for (name, rules) in self.iter() {
            let value = serde_json::to_value(rules)?;
            if name == DEFAULT_AREA {
                root.insert("files".to_string(), value);
            } else {
                areas.insert(name.to_string(), value);
            }
        }
        if !areas.is_empty() || root.is_empty() {
            root.insert("areas".to_string(), Value::Object(areas));
        }
        Ok(Value::Object(root))
    }

    /// Validate an in-memory collection with the same rules as a document.
    ///
    /// # Errors
    /// Returns an error if a rule-set cannot be serialized.
    pub fn validate(&self) -> Result<ValidationReport> {
        Ok(validate(&self.to_document()?))
    }

    pub fn insert(&mut self, name: impl Into<String>, rules: AreaRuleSet) -> Option<AreaRuleSet> {
        self.0.insert(name.into(), rules)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AreaRuleSet> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AreaRuleSet)> {
        self.0.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, AreaRuleSet)> for RuleSetCollection {
    fn from_iter<T: IntoIterator<Item = (String, AreaRuleSet)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn parse_area(name: &str, value: &Value) -> Result<AreaRuleSet> {
    AreaRuleSet::deserialize(value)
        .map_err(|e| ChangedAreasError::Config(format!("Area \"{name}\": {e}")))
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
