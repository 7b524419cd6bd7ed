use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// User filter selections submitted from the client
///
/// Every field is optional; missing or empty fields mean "no preference".
/// List fields tolerate a bare string in place of an array, and any other
/// JSON type degrades to "no preference" rather than rejecting the request.
/// Unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PreferenceInput {
    #[serde(default, deserialize_with = "one_or_many")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
}

/// Accepts `"english"`, `["english", "korean"]`, `null`, or anything else
/// (treated as absent).
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Other(Value),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
        Some(OneOrMany::Other(_)) | None => Vec::new(),
    })
}

/// A release year as the model may emit it: a number or a string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

/// The documented per-movie contract
///
/// The model's output is not guaranteed to conform, so every field defaults
/// when absent. Conformance is audited (logged), never enforced; see
/// `services::validator`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovieRecommendation {
    pub title: String,
    pub year: Option<Year>,
    pub language: String,
    pub age_rating: String,
    pub genres: Vec<String>,
    pub mood_tags: Vec<String>,
    pub short_reason: String,
}

/// The sole response contract exposed to the client
///
/// `movies` is always serialized as an array, possibly empty. Elements are
/// forwarded exactly as the upstream produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub movies: Vec<Value>,
}
