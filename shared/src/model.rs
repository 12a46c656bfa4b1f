use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Clothing slot. Declaration order is the fixed display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Outer,
    Inner1,
    Inner2,
    Bottom,
    Shoes,
}

impl Category {
    /// Categories that have an upload slot. Shoes are only ever recommended.
    pub const UPLOADABLE: [Category; 4] = [
        Category::Outer,
        Category::Inner1,
        Category::Inner2,
        Category::Bottom,
    ];

    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    pub fn is_uploadable(self) -> bool {
        self != Category::Shoes
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Outer => "🧥 아우터",
            Category::Inner1 => "👕 이너1 (겉 상의)",
            Category::Inner2 => "👔 이너2 (속 상의)",
            Category::Bottom => "👖 하의",
            Category::Shoes => "👟 신발",
        }
    }

    /// Multipart part name and JSON key.
    pub fn field_name(self) -> &'static str {
        match self {
            Category::Outer => "outer",
            Category::Inner1 => "inner1",
            Category::Inner2 => "inner2",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
        }
    }
}

/// One of the four required demographic/context fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum UserField {
    #[strum(serialize = "성별")]
    Gender,
    #[strum(serialize = "연령대")]
    AgeGroup,
    #[strum(serialize = "체형")]
    BodyType,
    #[strum(serialize = "TPO")]
    Tpo,
}

impl UserField {
    pub fn form_name(self) -> &'static str {
        match self {
            UserField::Gender => "gender",
            UserField::AgeGroup => "age_group",
            UserField::BodyType => "body_type",
            UserField::Tpo => "tpo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserField::Gender => "성별",
            UserField::AgeGroup => "연령대",
            UserField::BodyType => "체형",
            UserField::Tpo => "TPO",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub gender: String,
    pub age_group: String,
    pub body_type: String,
    pub tpo: String,
}

impl UserInfo {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Gender => &self.gender,
            UserField::AgeGroup => &self.age_group,
            UserField::BodyType => &self.body_type,
            UserField::Tpo => &self.tpo,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let slot = match field {
            UserField::Gender => &mut self.gender,
            UserField::AgeGroup => &mut self.age_group,
            UserField::BodyType => &mut self.body_type,
            UserField::Tpo => &mut self.tpo,
        };
        *slot = value.into();
    }

    /// Form fields in submission order.
    pub fn fields(&self) -> impl Iterator<Item = (UserField, &str)> {
        UserField::iter().map(move |field| (field, self.get(field)))
    }
}

/// Text for a number or string the backend sent, `None` for anything else.
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// A classifier verdict: label plus confidence in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub label: String,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<Value>,
}

impl Label {
    pub fn confidence_text(&self) -> String {
        scalar_text(self.confidence.as_ref()).unwrap_or_else(|| "0".to_string())
    }
}

/// A dominant color. Every field may be missing or malformed in a response,
/// so all of them are kept as the raw JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedItem {
    #[serde(rename = "type", default)]
    pub kind: Label,
    /// Kept exactly as received, `null` included, so the item echoes back
    /// unchanged. Read through [`AnalyzedItem::color_entries`].
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub colors: Option<Value>,
    #[serde(default)]
    pub pattern: Label,
    /// Backend fields this client does not interpret, sent back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalyzedItem {
    /// The color list, empty unless `colors` is an array. Entries that are
    /// not objects become an all-fallback color.
    pub fn color_entries(&self) -> Vec<ColorInfo> {
        match &self.colors {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub uploaded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub style_direction: String,
    #[serde(default, deserialize_with = "known_categories")]
    pub recommendations: BTreeMap<Category, RecommendedItem>,
    #[serde(default, deserialize_with = "string_list")]
    pub styling_tips: Vec<String>,
    /// Set by the backend when generation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user_info: UserInfo,
    #[serde(default, deserialize_with = "known_categories")]
    pub uploaded_items: BTreeMap<Category, AnalyzedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

/// Body of `POST /api/re-recommend`.
#[derive(Debug, Serialize)]
pub struct ReRecommendRequest<'a> {
    pub user_info: &'a UserInfo,
    pub uploaded_items: &'a BTreeMap<Category, AnalyzedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReRecommendResponse {
    pub recommendation: Recommendation,
}

/// Distinguishes an explicit `null` (`Some(Value::Null)`) from an absent
/// field (`None`, via `#[serde(default)]`).
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A category map that skips keys outside [`Category`] and entries that do
/// not decode, instead of failing the whole response.
fn known_categories<'de, D, T>(deserializer: D) -> Result<BTreeMap<Category, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            let Ok(category) = key.parse::<Category>() else {
                log::debug!("skipping unknown category {key:?}");
                return None;
            };
            match serde_json::from_value(value) {
                Ok(entry) => Some((category, entry)),
                Err(e) => {
                    log::warn!("skipping undecodable {category} entry: {e}");
                    None
                }
            }
        })
        .collect())
}

/// `null` or a non-array becomes an empty list; non-string entries are dropped.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
