use crate::tools::vocabulary::{
    enum_schema, string_or_list_schema, Availability, EducationType, FeeType, ScoreType,
    StringOrList, UniversityType, DEFAULT_MAX_RESULTS, whole_number,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Lisans program search filters. Field names already match the helper's
/// vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchBachelorProgramsInput {
    #[serde(default)]
    pub universite: Option<StringOrList>,
    #[serde(default)]
    pub program: Option<StringOrList>,
    #[serde(default)]
    pub sehir: Option<StringOrList>,
    #[serde(default)]
    pub puan_turu: Option<ScoreType>,
    #[serde(default)]
    pub universite_turu: Option<UniversityType>,
    #[serde(default)]
    pub ucret: Option<FeeType>,
    #[serde(default)]
    pub ogretim_turu: Option<EducationType>,
    #[serde(default)]
    pub doluluk: Option<Availability>,
    #[serde(default, deserialize_with = "whole_number::optional")]
    pub siralama: Option<u64>,
    #[serde(default, deserialize_with = "whole_number::optional")]
    pub max_results: Option<u32>,
}

/// What the helper receives for `search_bachelor_degree_programs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BachelorSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universite: Option<StringOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<StringOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sehir: Option<StringOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puan_turu: Option<ScoreType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universite_turu: Option<UniversityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ucret: Option<FeeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ogretim_turu: Option<EducationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doluluk: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub siralama: Option<u64>,
    pub max_results: u32,
}

pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "universite": string_or_list_schema("University name or list of names, fuzzy matched (e.g. \"boğaziçi\", \"odtü\")"),
            "program": string_or_list_schema("Program name or list of names, fuzzy matched (e.g. \"bilgisayar\")"),
            "sehir": string_or_list_schema("City name or list of city names"),
            "puan_turu": enum_schema(ScoreType::VALUES, "Score type"),
            "universite_turu": enum_schema(UniversityType::VALUES, "University type"),
            "ucret": enum_schema(FeeType::VALUES, "Fee status"),
            "ogretim_turu": enum_schema(EducationType::VALUES, "Education type"),
            "doluluk": enum_schema(Availability::VALUES, "Quota availability"),
            "siralama": {
                "type": "integer",
                "minimum": 1,
                "maximum": u64::MAX,
                "description": "Target success ranking; results are sampled around it"
            },
            "max_results": {
                "type": "integer",
                "minimum": 1,
                "maximum": u32::MAX,
                "default": DEFAULT_MAX_RESULTS,
                "description": "Maximum number of programs to return"
            }
        },
        "additionalProperties": false
    })
}
