//! Intent definitions - the closed set of requests the router answers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::RouteError;

/// Slot carrying the requested year for [`Intent::GetNewYearFact`].
pub const FACT_YEAR_SLOT: &str = "FACT_YEAR";

/// Unique identifier for a single request, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Create a new random request ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil request ID (useful for fixtures).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every intent the router knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Skill opened without a specific request.
    Launch,
    /// "Tell me a fact."
    GetNewFact,
    /// "Tell me a fact from 1997." Carries the `FACT_YEAR` slot.
    GetNewYearFact,
    Help,
    Cancel,
    Stop,
}

/// Logical handler state an intent is answered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerState {
    AwaitingFact,
    AwaitingYearFact,
    Help,
    Ended,
}

impl Intent {
    /// All recognized intents.
    pub const ALL: [Intent; 6] = [
        Intent::Launch,
        Intent::GetNewFact,
        Intent::GetNewYearFact,
        Intent::Help,
        Intent::Cancel,
        Intent::Stop,
    ];

    /// Parse an intent name.
    ///
    /// Accepts both the short names (`GetNewFact`) and the names registered
    /// with the voice platform (`GetNewFactIntent`, `AMAZON.HelpIntent`).
    pub fn from_name(name: &str) -> Result<Self, RouteError> {
        let intent = match name {
            "Launch" | "LaunchRequest" => Intent::Launch,
            "GetNewFact" | "GetNewFactIntent" | "GetFact" => Intent::GetNewFact,
            "GetNewYearFact" | "GetNewYearFactIntent" | "GetYearFact" => Intent::GetNewYearFact,
            "Help" | "AMAZON.HelpIntent" => Intent::Help,
            "Cancel" | "AMAZON.CancelIntent" => Intent::Cancel,
            "Stop" | "AMAZON.StopIntent" => Intent::Stop,
            other => return Err(RouteError::UnrecognizedIntent(other.to_string())),
        };
        Ok(intent)
    }

    /// Short name of the intent.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Launch => "Launch",
            Intent::GetNewFact => "GetNewFact",
            Intent::GetNewYearFact => "GetNewYearFact",
            Intent::Help => "Help",
            Intent::Cancel => "Cancel",
            Intent::Stop => "Stop",
        }
    }

    /// The handler state this intent is answered in.
    pub fn state(&self) -> HandlerState {
        match self {
            Intent::Launch | Intent::GetNewFact => HandlerState::AwaitingFact,
            Intent::GetNewYearFact => HandlerState::AwaitingYearFact,
            Intent::Help => HandlerState::Help,
            Intent::Cancel | Intent::Stop => HandlerState::Ended,
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized request handed over by the platform layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    #[serde(default)]
    pub id: RequestId,

    /// Intent name as received; parsed at dispatch time.
    pub intent_name: String,

    /// Slot values extracted upstream, passed through uninterpreted.
    #[serde(default)]
    pub slots: HashMap<String, String>,

    /// Locale tag of the request, e.g. `en-US`.
    #[serde(default)]
    pub locale: Option<String>,
}

impl IntentRequest {
    /// Create a request for the given intent name.
    pub fn new(intent_name: impl Into<String>) -> Self {
        Self {
            id: RequestId::new(),
            intent_name: intent_name.into(),
            slots: HashMap::new(),
            locale: None,
        }
    }

    /// Create a year-fact request with the `FACT_YEAR` slot filled.
    pub fn year_fact(year: impl Into<String>) -> Self {
        Self::new(Intent::GetNewYearFact.name()).with_slot(FACT_YEAR_SLOT, year)
    }

    /// Add a slot value.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Set the request locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the request ID.
    pub fn with_id(mut self, id: RequestId) -> Self {
        self.id = id;
        self
    }

    /// Get a slot value by name.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    /// The requested year, if the slot was filled.
    pub fn year(&self) -> Option<&str> {
        self.slot(FACT_YEAR_SLOT)
    }

    /// Parse the intent name.
    pub fn intent(&self) -> Result<Intent, RouteError> {
        Intent::from_name(&self.intent_name)
    }
}
