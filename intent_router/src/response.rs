//! The response record handed back to the platform layer.

use serde::{Deserialize, Serialize};

/// Visual companion to the spoken response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// What the platform layer should say and show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub speech_text: String,

    /// Spoken if the user stays silent. `None` when the session ends.
    pub reprompt_text: Option<String>,

    pub card: Option<Card>,

    /// Keep listening (`true`) or end the interaction (`false`).
    pub session_open: bool,
}

impl Response {
    /// Speak, show a card, and keep the session open.
    pub fn ask_with_card(
        speech: impl Into<String>,
        reprompt: impl Into<String>,
        card_title: impl Into<String>,
        card_body: impl Into<String>,
    ) -> Self {
        Self {
            speech_text: speech.into(),
            reprompt_text: Some(reprompt.into()),
            card: Some(Card {
                title: card_title.into(),
                body: card_body.into(),
            }),
            session_open: true,
        }
    }

    /// Speak and keep the session open, without a card.
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech_text: speech.into(),
            reprompt_text: Some(reprompt.into()),
            card: None,
            session_open: true,
        }
    }

    /// Speak and end the session.
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech_text: speech.into(),
            reprompt_text: None,
            card: None,
            session_open: false,
        }
    }

    pub fn card_title(&self) -> Option<&str> {
        self.card.as_ref().map(|card| card.title.as_str())
    }

    pub fn card_body(&self) -> Option<&str> {
        self.card.as_ref().map(|card| card.body.as_str())
    }

    /// Serialize for the platform layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
