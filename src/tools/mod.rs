pub mod atlas_details;
pub mod health_check;
pub mod schema;
pub mod search_associate;
pub mod search_bachelor;
pub mod vocabulary;

use crate::error::{Result, YokatlasError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use atlas_details::AtlasDetailsInput;
pub use health_check::HealthCheckInput;
pub use schema::SchemaRegistry;
pub use search_associate::SearchAssociateProgramsInput;
pub use search_bachelor::SearchBachelorProgramsInput;
pub use vocabulary::{StringOrList, TranslatedQuery};

/// The tools this server exposes. Each name is also the function name the
/// Python helper dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HealthCheck,
    GetAssociateDegreeAtlasDetails,
    GetBachelorDegreeAtlasDetails,
    SearchBachelorDegreePrograms,
    SearchAssociateDegreePrograms,
}

/// How the helper's standard output is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    /// Pre-formatted listing, forwarded to the caller as is.
    Text,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::HealthCheck,
        Operation::GetAssociateDegreeAtlasDetails,
        Operation::GetBachelorDegreeAtlasDetails,
        Operation::SearchBachelorDegreePrograms,
        Operation::SearchAssociateDegreePrograms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::HealthCheck => "health_check",
            Operation::GetAssociateDegreeAtlasDetails => "get_associate_degree_atlas_details",
            Operation::GetBachelorDegreeAtlasDetails => "get_bachelor_degree_atlas_details",
            Operation::SearchBachelorDegreePrograms => "search_bachelor_degree_programs",
            Operation::SearchAssociateDegreePrograms => "search_associate_degree_programs",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::HealthCheck => {
                "Check that the YÖK Atlas data helper is reachable and its search module is installed"
            }
            Operation::GetAssociateDegreeAtlasDetails => {
                "Get comprehensive atlas details (quotas, placement statistics, rankings) for one associate degree (önlisans) program by YÖP code and year"
            }
            Operation::GetBachelorDegreeAtlasDetails => {
                "Get comprehensive atlas details (quotas, placement statistics, rankings) for one bachelor's degree (lisans) program by YÖP code and year"
            }
            Operation::SearchBachelorDegreePrograms => {
                "Search bachelor's degree (lisans) programs with fuzzy university/program/city matching and optional ranking-centred sampling"
            }
            Operation::SearchAssociateDegreePrograms => {
                "Search associate degree (önlisans) programs with fuzzy university/program/city matching; always uses the TYT score track"
            }
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        match self {
            Operation::SearchBachelorDegreePrograms | Operation::SearchAssociateDegreePrograms => {
                OutputMode::Text
            }
            _ => OutputMode::Json,
        }
    }

    pub fn input_schema(&self) -> Value {
        match self {
            Operation::HealthCheck => health_check::input_schema(),
            Operation::GetAssociateDegreeAtlasDetails => atlas_details::input_schema("associate degree"),
            Operation::GetBachelorDegreeAtlasDetails => atlas_details::input_schema("bachelor's degree"),
            Operation::SearchBachelorDegreePrograms => search_bachelor::input_schema(),
            Operation::SearchAssociateDegreePrograms => search_associate::input_schema(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = YokatlasError;

    fn from_str(name: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| YokatlasError::validation("name", format!("Unknown tool: {}", name)))
    }
}

/// Schema-checked arguments, typed per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArguments {
    HealthCheck(HealthCheckInput),
    AtlasDetails(AtlasDetailsInput),
    SearchBachelor(SearchBachelorProgramsInput),
    SearchAssociate(SearchAssociateProgramsInput),
}

impl ToolArguments {
    pub fn parse(operation: Operation, arguments: Value) -> Result<Self> {
        Ok(match operation {
            Operation::HealthCheck => ToolArguments::HealthCheck(decode(arguments)?),
            Operation::GetAssociateDegreeAtlasDetails | Operation::GetBachelorDegreeAtlasDetails => {
                ToolArguments::AtlasDetails(decode(arguments)?)
            }
            Operation::SearchBachelorDegreePrograms => ToolArguments::SearchBachelor(decode(arguments)?),
            Operation::SearchAssociateDegreePrograms => {
                ToolArguments::SearchAssociate(decode(arguments)?)
            }
        })
    }
}

/// Maps typed arguments onto the helper's vocabulary. Pure: the same input
/// always yields the same query.
pub fn translate(arguments: &ToolArguments) -> Result<TranslatedQuery> {
    match arguments {
        ToolArguments::HealthCheck(input) => health_check::translate(input),
        ToolArguments::AtlasDetails(input) => atlas_details::translate(input),
        ToolArguments::SearchBachelor(input) => search_bachelor::translate(input),
        ToolArguments::SearchAssociate(input) => search_associate::translate(input),
    }
}

fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| YokatlasError::validation("arguments", format!("Invalid arguments: {}", e)))
}
