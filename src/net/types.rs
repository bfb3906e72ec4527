//! Wire DTOs for the metadata API and the external menu API.
//!
//! DESIGN
//! ======
//! Dataset rows come out of DynamoDB through a hand-rolled serializer, so
//! several fields arrive as either numbers or strings depending on how a
//! record was written. The lenient deserializers here normalize those
//! shapes instead of failing the whole payload: a malformed record
//! degrades to empty fields rather than breaking the dataset view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One labeled plate record as stored by the metadata API.
///
/// `objectKey` is the primary key; records are immutable once written and
/// never deleted by this client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleRecord {
    /// Object-storage key of the plate photo (unique).
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub object_key: String,
    /// Bucket holding the photo.
    pub bucket: String,
    /// Meal date in `YYYY-MM-DD` form.
    pub meal_date: String,
    /// One of `breakfast`, `lunch`, `dinner`.
    pub mealtime: String,
    /// Dining hall identifier; numeric upstream, normalized to a string.
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub dining_hall_id: String,
    /// Labeling difficulty (`easy`, `medium`, `hard`).
    pub difficulty: String,
    /// Recorded line items. Missing or non-array payloads become empty.
    #[serde(deserialize_with = "deserialize_lenient_items")]
    pub items: Vec<PlateItem>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Uploader identity, if recorded.
    pub uploaded_by: String,
}

/// One line item on a labeled plate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlateItem {
    /// Catalog id of the menu item; numeric upstream ids become strings.
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub menu_item_id: String,
    /// Recorded servings. Numbers and numeric strings parse; anything
    /// else becomes `None` and buckets as the lowest solo range.
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub servings: Option<f64>,
}

/// A menu item known to the external menu system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub id: String,
    pub name: String,
}

/// One row of a date/meal/hall-scoped menu query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuEntry {
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub id: String,
    pub name: String,
    pub station: String,
}

/// Envelope returned by `GET /dataset`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetResponse {
    pub items: Vec<SampleRecord>,
    pub scanned_count: u64,
}

/// Envelope returned by `GET /dataset/{objectKey}`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SampleResponse {
    pub item: Option<SampleRecord>,
}

/// Presigned write descriptor returned by `POST /uploads/presign`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresignedUpload {
    pub upload_url: String,
    pub method: String,
    pub headers: std::collections::HashMap<String, String>,
    pub object_key: String,
    pub bucket: String,
}

/// Presigned read descriptor returned by `POST /downloads/presign`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresignedDownload {
    pub download_url: String,
    pub expires_in: Option<u64>,
}

/// Normalized metadata record posted after a successful object upload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub object_key: String,
    pub bucket: String,
    pub mealtime: String,
    pub meal_date: String,
    pub dining_hall_id: String,
    pub difficulty: String,
    pub items: Vec<UploadItem>,
}

/// One normalized line item in an upload submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadItem {
    pub menu_item_id: String,
    pub servings: f64,
}

/// Mealtimes recognized by both APIs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mealtime {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
}

impl Mealtime {
    pub const ALL: [Mealtime; 3] = [Mealtime::Breakfast, Mealtime::Lunch, Mealtime::Dinner];

    /// Lowercase wire form used by the metadata API.
    pub fn as_str(self) -> &'static str {
        match self {
            Mealtime::Breakfast => "breakfast",
            Mealtime::Lunch => "lunch",
            Mealtime::Dinner => "dinner",
        }
    }

    /// Capitalized form used for display and by the menu API's `meal`
    /// query parameter.
    pub fn label(self) -> &'static str {
        match self {
            Mealtime::Breakfast => "Breakfast",
            Mealtime::Lunch => "Lunch",
            Mealtime::Dinner => "Dinner",
        }
    }

    /// Parse the lowercase wire form.
    pub fn parse(value: &str) -> Option<Mealtime> {
        match value {
            "breakfast" => Some(Mealtime::Breakfast),
            "lunch" => Some(Mealtime::Lunch),
            "dinner" => Some(Mealtime::Dinner),
            _ => None,
        }
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn deserialize_lenient_items<'de, D>(deserializer: D) -> Result<Vec<PlateItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    // Unparsable entries are dropped rather than failing the record.
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
