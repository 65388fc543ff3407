// Typed view of the JSON the nl-search service returns
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Filters the service inferred from the query. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderFilter {
    pub location_name: Option<String>,
    pub location_type: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub date_field: Option<String>,
    pub city: Option<String>,
    pub company_name: Option<String>,
    pub carrier_name: Option<String>,
    pub exclude_location_name: Option<String>,
    pub exclude_city: Option<String>,
    pub exclude_company_name: Option<String>,
    pub exclude_carrier_name: Option<String>,
    pub exclude_status: Option<Vec<String>>,
    pub collected_by: Option<Vec<String>>,
    pub service: Option<Vec<String>>,
    pub exclude_location_type: Option<Vec<String>>,
    pub exclude_service: Option<Vec<String>>,
    pub exclude_collected_by: Option<Vec<String>>,
    pub flags: Option<Vec<String>>,
    pub exclude_flags: Option<Vec<String>>,
}

/// Explicit `null` reads the same as a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NlSearchResponse {
    pub filters: Option<OrderFilter>,
    #[serde(deserialize_with = "null_as_empty")]
    pub results: Vec<Map<String, Value>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub warnings: Vec<String>,
    #[serde(rename = "followUp")]
    pub follow_up: Option<String>,
}

/// Shape of 4xx/5xx replies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub label: String,
    pub value: String,
}

impl SummaryItem {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

fn text(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn list(field: &Option<Vec<String>>) -> Option<String> {
    field
        .as_ref()
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
}

fn date_label(date_field: Option<&str>) -> String {
    let field = date_field.filter(|s| !s.is_empty()).unwrap_or("CREATED");
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!("Date ({}{})", first, chars.as_str().to_lowercase()),
        None => "Date".to_string(),
    }
}

/// Label/value pairs describing a filter, in display order.
pub fn filter_summary(filter: &OrderFilter) -> Vec<SummaryItem> {
    let mut summary = Vec::new();

    let included = [
        ("Location", text(&filter.location_name).map(str::to_string)),
        ("Location Type", text(&filter.location_type).map(str::to_string)),
        ("City", text(&filter.city).map(str::to_string)),
        ("Company", text(&filter.company_name).map(str::to_string)),
        ("Carrier", text(&filter.carrier_name).map(str::to_string)),
        ("Service", list(&filter.service)),
        ("Collected By", list(&filter.collected_by)),
        ("Flags", list(&filter.flags)),
    ];
    for (label, value) in included {
        if let Some(value) = value {
            summary.push(SummaryItem::new(label, value));
        }
    }

    let range = match (text(&filter.date_from), text(&filter.date_to)) {
        (Some(from), Some(to)) => Some(format!("{} → {}", from, to)),
        (Some(from), None) => Some(format!("From {}", from)),
        (None, Some(to)) => Some(format!("Until {}", to)),
        (None, None) => None,
    };
    if let Some(range) = range {
        summary.push(SummaryItem::new(date_label(filter.date_field.as_deref()), range));
    }

    let excluded = [
        ("Status", list(&filter.exclude_status)),
        ("Location", text(&filter.exclude_location_name).map(str::to_string)),
        ("Location Type", list(&filter.exclude_location_type)),
        ("City", text(&filter.exclude_city).map(str::to_string)),
        ("Company", text(&filter.exclude_company_name).map(str::to_string)),
        ("Carrier", text(&filter.exclude_carrier_name).map(str::to_string)),
        ("Service", list(&filter.exclude_service)),
        ("Collected By", list(&filter.exclude_collected_by)),
        ("Flags", list(&filter.exclude_flags)),
    ];
    let exclusions: Vec<String> = excluded
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v)))
        .collect();
    if !exclusions.is_empty() {
        summary.push(SummaryItem::new("Excluded", exclusions.join("; ")));
    }

    summary
}
