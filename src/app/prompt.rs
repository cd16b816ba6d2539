//! Two-step marker dialog.
//!
//! Asks for a name, then an optional description. Dismissing a step counts
//! as an empty answer; the dialog always ends with a marker to create.

use crate::app::state::InputState;
use crate::map::marker::LatLng;

pub const DEFAULT_MARKER_NAME: &str = "Custom Location";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptStage {
    Name,
    Description,
}

#[derive(Debug, PartialEq)]
pub enum PromptOutcome {
    Pending,
    Complete { name: String, description: String },
}

#[derive(Debug)]
pub struct MarkerPrompt {
    pub position: LatLng,
    pub stage: PromptStage,
    pub input: InputState,
    name: Option<String>,
}

impl MarkerPrompt {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            stage: PromptStage::Name,
            input: InputState::new(),
            name: None,
        }
    }

    pub fn question(&self) -> &'static str {
        match self.stage {
            PromptStage::Name => "Enter a name for this location:",
            PromptStage::Description => "Enter a description (optional):",
        }
    }

    /// Accept the current input for this stage.
    pub fn submit(&mut self) -> PromptOutcome {
        let text = self.input.take_text();
        self.advance(text)
    }

    /// Close the current stage without an answer.
    pub fn dismiss(&mut self) -> PromptOutcome {
        self.input.take_text();
        self.advance(String::new())
    }

    fn advance(&mut self, answer: String) -> PromptOutcome {
        match self.stage {
            PromptStage::Name => {
                self.name = Some(answer).filter(|s| !s.is_empty());
                self.stage = PromptStage::Description;
                PromptOutcome::Pending
            }
            PromptStage::Description => PromptOutcome::Complete {
                name: self
                    .name
                    .take()
                    .unwrap_or_else(|| DEFAULT_MARKER_NAME.to_string()),
                description: answer,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(prompt: &mut MarkerPrompt, text: &str) {
        for c in text.chars() {
            prompt.input.insert_char(c);
        }
    }

    #[test]
    fn test_name_and_description() {
        let mut p = MarkerPrompt::new(LatLng::new(1.0, 2.0));
        assert_eq!(p.stage, PromptStage::Name);
        type_text(&mut p, "Beach");
        assert_eq!(p.submit(), PromptOutcome::Pending);
        assert_eq!(p.stage, PromptStage::Description);
        assert!(p.input.text.is_empty());
        type_text(&mut p, "Sunny");
        assert_eq!(
            p.submit(),
            PromptOutcome::Complete {
                name: "Beach".into(),
                description: "Sunny".into()
            }
        );
    }

    #[test]
    fn test_empty_answers_use_defaults() {
        let mut p = MarkerPrompt::new(LatLng::new(0.0, 0.0));
        assert_eq!(p.submit(), PromptOutcome::Pending);
        assert_eq!(
            p.submit(),
            PromptOutcome::Complete {
                name: DEFAULT_MARKER_NAME.into(),
                description: String::new()
            }
        );
    }

    #[test]
    fn test_dismiss_discards_typed_text() {
        let mut p = MarkerPrompt::new(LatLng::new(0.0, 0.0));
        type_text(&mut p, "half typed");
        assert_eq!(p.dismiss(), PromptOutcome::Pending);
        type_text(&mut p, "also dropped");
        assert_eq!(
            p.dismiss(),
            PromptOutcome::Complete {
                name: DEFAULT_MARKER_NAME.into(),
                description: String::new()
            }
        );
    }
}
