use crate::tools::vocabulary::{
    enum_schema, string_or_list_schema, Availability, EducationType, FeeType, StringOrList,
    UniversityType, DEFAULT_MAX_RESULTS, whole_number,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Önlisans program search filters in the public, English vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchAssociateProgramsInput {
    #[serde(default)]
    pub university: Option<StringOrList>,
    #[serde(default)]
    pub program: Option<StringOrList>,
    #[serde(default)]
    pub city: Option<StringOrList>,
    #[serde(default)]
    pub university_type: Option<UniversityType>,
    #[serde(default)]
    pub fee_type: Option<FeeType>,
    #[serde(default)]
    pub education_type: Option<EducationType>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default, deserialize_with = "whole_number::optional")]
    pub siralama: Option<u64>,
    #[serde(default, deserialize_with = "whole_number::optional")]
    pub max_results: Option<u32>,
}

/// What the helper receives for `search_associate_degree_programs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociateSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universite: Option<StringOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<StringOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sehir: Option<StringOrList>,
    pub puan_turu: &'static str,
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
            "university": string_or_list_schema("University name or list of names, fuzzy matched"),
            "program": string_or_list_schema("Program name or list of names, fuzzy matched (e.g. \"bilgisayar programcılığı\")"),
            "city": string_or_list_schema("City name or list of city names"),
            "university_type": enum_schema(UniversityType::VALUES, "University type"),
            "fee_type": enum_schema(FeeType::VALUES, "Fee status"),
            "education_type": enum_schema(EducationType::VALUES, "Education type"),
            "availability": enum_schema(Availability::VALUES, "Quota availability"),
            "siralama": {
                "type": "integer",
                "minimum": 1,
                "maximum": u64::MAX,
                "description": "Target TYT success ranking; results are sampled around it"
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
