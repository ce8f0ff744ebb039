use crate::tools::vocabulary::whole_number;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Lookup key for one program's atlas page. Shared by the bachelor's and
/// associate detail tools; the operation decides which atlas is queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasDetailsInput {
    pub yop_kodu: String,
    #[serde(deserialize_with = "whole_number::required")]
    pub year: i32,
}

pub fn input_schema(degree: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "yop_kodu": {
                "type": "string",
                "minLength": 1,
                "description": format!("ÖSYM program code (YÖP kodu) of the {} program, e.g. \"102210277\"", degree)
            },
            "year": {
                "type": "integer",
                "minimum": i32::MIN,
                "maximum": i32::MAX,
                "description": "Placement year of the atlas data, e.g. 2024"
            }
        },
        "required": ["yop_kodu", "year"],
        "additionalProperties": false
    })
}
