//! Caller-side conversational state.

/// Role of one transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One (role, text) turn.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// An accumulating sequence of turns. On each new user turn the whole
/// transcript is re-joined into a single combined snippet for analysis;
/// the engine itself stays stateless.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: &str) {
        self.turns.push(Turn {
            role: Role::User,
            text: text.to_string(),
        });
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.turns.push(Turn {
            role: Role::Assistant,
            text: text.to_string(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// All turn texts, newline-joined, in order.
    pub fn combined(&self) -> String {
        self.turns
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_joins_turns_with_newlines_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("anxiety for two weeks");
        transcript.push_assistant("Identified 1 findings across 1 domains.");
        transcript.push_user("also trouble concentrating");
        assert_eq!(
            transcript.combined(),
            "anxiety for two weeks\nIdentified 1 findings across 1 domains.\nalso trouble concentrating"
        );
    }

    #[test]
    fn empty_transcript_combines_to_empty_string() {
        assert_eq!(Transcript::new().combined(), "");
    }
}
