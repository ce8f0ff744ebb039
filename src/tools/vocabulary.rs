//! Classification axes and value shapes shared by the program search tools.
//!
//! Every enum serializes to the exact string the YÖK Atlas helper filters on,
//! and exposes `VALUES` so the declared JSON schemas stay in step with the
//! Rust types.

use crate::error::{Result, YokatlasError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

macro_rules! vocabulary_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary_enum! {
    /// Puan türü: the score track a bachelor's program admits on.
    ScoreType {
        Say => "SAY",
        Ea => "EA",
        Soz => "SOZ",
        Dil => "DIL",
    }
}

vocabulary_enum! {
    UniversityType {
        Devlet => "Devlet",
        Vakif => "Vakıf",
        Kktc => "KKTC",
        YurtDisi => "Yurt Dışı",
    }
}

vocabulary_enum! {
    FeeType {
        Ucretsiz => "Ücretsiz",
        Ucretli => "Ücretli",
        IkinciOgretimUcretli => "İÖ-Ücretli",
        Burslu => "Burslu",
        YuzdeElliIndirimli => "%50 İndirimli",
        YuzdeYirmiBesIndirimli => "%25 İndirimli",
        AcikogretimUcretli => "AÖ-Ücretli",
        UzaktanOgretimUcretli => "UÖ-Ücretli",
    }
}

vocabulary_enum! {
    EducationType {
        Orgun => "Örgün",
        Ikinci => "İkinci",
        Acikogretim => "Açıköğretim",
        Uzaktan => "Uzaktan",
    }
}

vocabulary_enum! {
    /// Doluluk: whether the program filled its quota in the last placement.
    Availability {
        Doldu => "Doldu",
        DolduSonKisi => "Doldu#",
        Dolmadi => "Dolmadı",
        Yeni => "Yeni",
    }
}

/// Score track the associate-degree search always runs on.
pub const ASSOCIATE_SCORE_TYPE: &str = "tyt";

pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// A name filter given either as one value or as several alternatives.
///
/// Lists are forwarded as lists; the helper matches each entry separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn values(&self) -> Vec<&str> {
        match self {
            StringOrList::One(value) => vec![value.as_str()],
            StringOrList::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Arguments in the helper's own vocabulary, ready to be serialized onto its
/// command line. Keys are kept sorted so identical queries encode identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslatedQuery(BTreeMap<String, Value>);

impl TranslatedQuery {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(fields) => Ok(Self(fields.into_iter().collect())),
            other => Err(YokatlasError::internal(format!(
                "query must encode as an object, got {}",
                other
            ))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

/// Serde adapters for counts and years. JSON has a single number type, so
/// `5` and `5.0` are the same value here; anything with a fractional part or
/// outside the target range is rejected.
pub(crate) mod whole_number {
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    fn convert<T, E>(number: &Number) -> Result<T, E>
    where
        T: TryFrom<u64> + TryFrom<i64>,
        E: serde::de::Error,
    {
        let converted = if let Some(n) = number.as_u64() {
            <T as TryFrom<u64>>::try_from(n).ok()
        } else if let Some(n) = number.as_i64() {
            <T as TryFrom<i64>>::try_from(n).ok()
        } else {
            match number.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 => {
                    <T as TryFrom<u64>>::try_from(f as u64).ok()
                }
                Some(f) if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 => {
                    <T as TryFrom<i64>>::try_from(f as i64).ok()
                }
                _ => None,
            }
        };
        converted.ok_or_else(|| E::custom(format!("{} is not a whole number in range", number)))
    }

    pub fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64> + TryFrom<i64>,
    {
        convert(&Number::deserialize(deserializer)?)
    }

    pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64> + TryFrom<i64>,
    {
        Option::<Number>::deserialize(deserializer)?
            .map(|number| convert(&number))
            .transpose()
    }
}

/// JSON-schema fragment for a [`StringOrList`] field.
pub(crate) fn string_or_list_schema(description: &str) -> Value {
    serde_json::json!({
        "description": description,
        "anyOf": [
            { "type": "string", "minLength": 1 },
            { "type": "array", "items": { "type": "string", "minLength": 1 }, "minItems": 1 }
        ]
    })
}

pub(crate) fn enum_schema(values: &[&str], description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn turkish_values_round_trip_exactly() {
        assert_eq!(serde_json::to_value(UniversityType::Vakif).unwrap(), json!("Vakıf"));
        assert_eq!(
            serde_json::from_value::<FeeType>(json!("%50 İndirimli")).unwrap(),
            FeeType::YuzdeElliIndirimli
        );
        assert_eq!(Availability::DolduSonKisi.as_str(), "Doldu#");
    }

    #[test]
    fn values_cover_every_variant() {
        assert_eq!(ScoreType::VALUES.len(), 4);
        assert_eq!(UniversityType::VALUES.len(), 4);
        assert_eq!(FeeType::VALUES.len(), 8);
        assert_eq!(EducationType::VALUES.len(), 4);
        assert_eq!(Availability::VALUES.len(), 4);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(serde_json::from_value::<ScoreType>(json!("TYT")).is_err());
    }

    #[test]
    fn list_filter_stays_a_list() {
        let parsed: StringOrList = serde_json::from_value(json!(["boğaziçi", "odtü"])).unwrap();
        assert_eq!(parsed.values(), vec!["boğaziçi", "odtü"]);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!(["boğaziçi", "odtü"]));
    }

    #[derive(Debug, Deserialize)]
    struct Counts {
        #[serde(deserialize_with = "whole_number::required")]
        year: i32,
        #[serde(default, deserialize_with = "whole_number::optional")]
        max_results: Option<u32>,
    }

    #[test]
    fn integral_floats_count_as_whole_numbers() {
        let counts: Counts = serde_json::from_value(json!({ "year": 2024.0, "max_results": 1.0 })).unwrap();
        assert_eq!(counts.year, 2024);
        assert_eq!(counts.max_results, Some(1));

        let counts: Counts = serde_json::from_value(json!({ "year": 2023 })).unwrap();
        assert_eq!(counts.max_results, None);
    }

    #[test]
    fn fractional_or_out_of_range_numbers_are_rejected() {
        assert!(serde_json::from_value::<Counts>(json!({ "year": 2024.5 })).is_err());
        assert!(serde_json::from_value::<Counts>(json!({ "year": 5_000_000_000u64 })).is_err());
        assert!(serde_json::from_value::<Counts>(json!({ "year": 2024, "max_results": -1 })).is_err());
    }

    #[test]
    fn query_encoding_is_key_sorted() {
        let query = TranslatedQuery::from_serialize(&json!({"year": 2024, "yop_kodu": "1"})).unwrap();
        assert_eq!(query.to_json_string().unwrap(), r#"{"year":2024,"yop_kodu":"1"}"#);
    }
}
