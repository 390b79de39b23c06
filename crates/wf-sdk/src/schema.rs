//! Response schemas for the JSON-constrained calls.

use serde_json::{json, Value};

/// `{ tip, segments: [{ id, intensity, label }] }`
pub fn traffic_report() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tip": { "type": "STRING" },
            "segments": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "intensity": { "type": "STRING", "description": "Low, Moderate, or Heavy" },
                        "label": { "type": "STRING" }
                    },
                    "required": ["id", "intensity", "label"]
                }
            }
        },
        "required": ["tip", "segments"]
    })
}

/// `{ priority, sentiment, suggestedAction }`
pub fn message_insight() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "priority": { "type": "STRING" },
            "sentiment": { "type": "STRING" },
            "suggestedAction": { "type": "STRING" }
        },
        "required": ["priority", "sentiment", "suggestedAction"]
    })
}
