//! Shared domain enums

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Lifecycle stage of a maintenance request.
///
/// Transitions are unrestricted within this set: a repaired request can go
/// back to `new`, a scrapped one can be reopened. Membership is the only rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    New,
    InProgress,
    Repaired,
    Scrap,
}

/// Stage value outside the legal set
#[derive(Debug, Error)]
#[error("Invalid stage. Must be one of: new, in_progress, repaired, scrap")]
pub struct ParseStageError(pub String);

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::New, Stage::InProgress, Stage::Repaired, Stage::Scrap];

    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::InProgress => "in_progress",
            Stage::Repaired => "repaired",
            Stage::Scrap => "scrap",
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Stage::New),
            "in_progress" => Ok(Stage::InProgress),
            "repaired" => Ok(Stage::Repaired),
            "scrap" => Ok(Stage::Scrap),
            _ => Err(ParseStageError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Stage {
    type Error = ParseStageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// Kind of maintenance work, `corrective` when not specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    #[default]
    Corrective,
    Preventive,
}

/// Request type value outside the legal set
#[derive(Debug, Error)]
#[error("Invalid request type. Must be one of: corrective, preventive")]
pub struct ParseRequestTypeError(pub String);

impl RequestType {
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestType::Corrective => "corrective",
            RequestType::Preventive => "preventive",
        }
    }
}

impl std::str::FromStr for RequestType {
    type Err = ParseRequestTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corrective" => Ok(RequestType::Corrective),
            "preventive" => Ok(RequestType::Preventive),
            _ => Err(ParseRequestTypeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for RequestType {
    type Error = ParseRequestTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_round_trips_through_str() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>().unwrap(), stage);
        }
    }

    #[test]
    fn stage_rejects_unknown_values() {
        assert!("approved".parse::<Stage>().is_err());
        assert!("New".parse::<Stage>().is_err());
        assert!("".parse::<Stage>().is_err());
        assert!("in progress".parse::<Stage>().is_err());
    }

    #[test]
    fn stage_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Stage::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn request_type_defaults_to_corrective() {
        assert_eq!(RequestType::default(), RequestType::Corrective);
    }

    #[test]
    fn request_type_rejects_unknown_values() {
        assert!("predictive".parse::<RequestType>().is_err());
    }
}
