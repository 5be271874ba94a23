/// Outcome of asking the user for a line of text.
///
/// Cancellation is its own variant so it can never be confused with
/// submitting an empty string, which is a valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    Cancelled,
}

/// Collaborator that solicits a text value from the user, seeded with a
/// default. The UI supplies the real implementation; tests use stubs.
pub trait TextPrompt {
    fn prompt(&mut self, message: &str, default_value: &str) -> PromptResponse;
}
