//! Frontend Models
//!
//! Request bodies and response shapes exchanged with the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

// ========================
// Request Bodies
// ========================

/// Body of `POST /api/add_loss_record`
///
/// `weight_grams` is `None` when the field did not parse as a number; it is
/// then sent as JSON `null` and the backend reports the validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossRecordPayload {
    pub user_id: u32,
    pub item_name: String,
    pub weight_grams: Option<f64>,
    pub reason_text: String,
}

// ========================
// Error Bodies
// ========================

/// One segment of a validation error location (field name or list index)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Index(i64),
    Number(serde_json::Number),
    Name(String),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Index(i) => write!(f, "{}", i),
            LocSegment::Number(n) => write!(f, "{}", n),
            LocSegment::Name(name) => f.write_str(name),
        }
    }
}

/// Field-addressed rejection returned inside a 422 body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationDetail {
    #[serde(default)]
    pub loc: Option<Vec<LocSegment>>,
    #[serde(default)]
    pub msg: String,
}

impl ValidationDetail {
    /// Lenient read of one `details` entry; a malformed `loc` becomes `None`
    pub fn from_entry(entry: &serde_json::Value) -> Self {
        let loc = entry
            .get("loc")
            .and_then(|loc| serde_json::from_value::<Vec<LocSegment>>(loc.clone()).ok());
        let msg = match entry.get("msg") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            None | Some(serde_json::Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };
        Self { loc, msg }
    }
}

// ========================
// Stats
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGraphPoint {
    pub day: String,
    pub total_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRow {
    pub date: String,
    pub dish_name: String,
    pub weight_grams: f64,
    pub reason: String,
}

/// Body of `GET /api/weekly_stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub daily_graph_data: Vec<DailyGraphPoint>,
    #[serde(default)]
    pub dish_table: Vec<DishRow>,
    #[serde(default)]
    pub week_start: Option<String>,
    #[serde(default)]
    pub week_end: Option<String>,
}

// ========================
// Points
// ========================

/// Body of `GET /api/user/me`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub total_points: f64,
}

/// Body of `POST /api/calculate_weekly_points`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeeklyPointsResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub points_added: Option<f64>,
    #[serde(default)]
    pub final_reduction_rate: Option<f64>,
}

/// Reward catalogue entry embedded in the points page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reward {
    pub item: String,
    pub cost: u32,
}

// ========================
// Knowledge
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnowledgeItem {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl KnowledgeItem {
    /// Items need both a title and content to be listed
    pub fn is_listable(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.title) && filled(&self.content)
    }

    /// Id of the detail modal this item opens
    pub fn modal_id(&self) -> String {
        format!("modal-{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KnowledgeCatalog {
    #[serde(default)]
    pub items: Vec<KnowledgeItem>,
    #[serde(default)]
    pub categories: Vec<String>,
}
