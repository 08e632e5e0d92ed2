//! Token-source pass: the editor's JSON shape tree as transient raw nodes.
//!
//! Each shape object looks like:
//!
//! ```text
//! {
//!   "resourceId": "oryx_1AAA8C9A",
//!   "properties": { "name": "Approve", "tasktype": "User" },
//!   "stencil":    { "id": "Task" },
//!   "childShapes": [ ... ],
//!   "outgoing":   [ { "resourceId": "oryx_55B2" } ],
//!   "bounds": { ... }, "dockers": [ ... ], "target": { ... }
//! }
//! ```
//!
//! Only the identifier, the flattened property bag, the stencil id, the
//! children and the outgoing ids are extracted. Layout data (`bounds`,
//! `dockers`) and the redundant `target` object are skipped without being
//! read, as is any field the translator does not know.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::IgnoredAny};
use serde_json::Value;

/// Flat property bag of one shape. Keys are case-sensitive; values are text.
pub(crate) type PropertyBag = IndexMap<String, String>;

/// One shape object, before any element has been created for it.
#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    #[serde(rename = "resourceId", default)]
    pub(crate) resource_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_properties")]
    pub(crate) properties: PropertyBag,

    #[serde(default, deserialize_with = "deserialize_stencil")]
    pub(crate) stencil: Option<String>,

    #[serde(rename = "childShapes", default)]
    pub(crate) child_shapes: Vec<RawNode>,

    #[serde(default, deserialize_with = "deserialize_outgoing")]
    pub(crate) outgoing: Vec<String>,

    #[serde(rename = "bounds", default)]
    _bounds: IgnoredAny,

    #[serde(rename = "dockers", default)]
    _dockers: IgnoredAny,

    #[serde(rename = "target", default)]
    _target: IgnoredAny,
}

#[derive(Deserialize)]
struct StencilRef {
    id: String,
}

#[derive(Deserialize)]
struct Reference {
    #[serde(rename = "resourceId")]
    resource_id: String,
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<PropertyBag, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<IndexMap<String, Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| property_text(value).map(|text| (key, text)))
        .collect())
}

/// Render a property value as text. `null` counts as an absent property.
fn property_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}

fn deserialize_stencil<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StencilRef>::deserialize(deserializer)?.map(|stencil| stencil.id))
}

fn deserialize_outgoing<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let references = Option::<Vec<Reference>>::deserialize(deserializer)?;
    Ok(references
        .unwrap_or_default()
        .into_iter()
        .map(|reference| reference.resource_id)
        .collect())
}
