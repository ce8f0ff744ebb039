use super::dto::AtlasDetailsInput;
use crate::error::{Result, YokatlasError};
use crate::tools::TranslatedQuery;

pub fn translate(input: &AtlasDetailsInput) -> Result<TranslatedQuery> {
    if input.yop_kodu.trim().is_empty() {
        return Err(YokatlasError::validation("yop_kodu", "yop_kodu is required"));
    }
    TranslatedQuery::from_serialize(input)
}
