use super::dto::HealthCheckInput;
use crate::error::Result;
use crate::tools::TranslatedQuery;

/// The helper's health check takes no parameters.
pub fn translate(_input: &HealthCheckInput) -> Result<TranslatedQuery> {
    Ok(TranslatedQuery::empty())
}
