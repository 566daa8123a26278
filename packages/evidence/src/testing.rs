//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the retrieval
//! pipeline without making real model or network calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, RetrievalError};
use crate::traits::model::GenerativeModel;
use crate::types::grounding::GroundedAnswer;

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub enum MockCall {
    Grounded { instruction: String },
    Structured { prompt: String },
}

/// A mock model for testing.
///
/// Canned responses are queued in order; each call consumes the next one.
/// An exhausted queue falls back to a harmless default (an ungrounded empty
/// answer, or `null`), so tests only configure what they assert on.
#[derive(Default)]
pub struct MockModel {
    grounded: Mutex<VecDeque<std::result::Result<GroundedAnswer, String>>>,
    structured: Mutex<VecDeque<std::result::Result<Value, String>>>,

    /// Call tracking for assertions
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockModel {
    /// Create a new mock model with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned grounded answer.
    pub fn with_grounded(self, answer: GroundedAnswer) -> Self {
        self.grounded.lock().unwrap().push_back(Ok(answer));
        self
    }

    /// Queue a grounded-call failure.
    pub fn with_grounded_failure(self, message: impl Into<String>) -> Self {
        self.grounded.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Queue a canned structured response.
    pub fn with_structured(self, value: Value) -> Self {
        self.structured.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a structured-call failure.
    pub fn with_structured_failure(self, message: impl Into<String>) -> Self {
        self.structured.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_grounded(&self, instruction: &str) -> Result<GroundedAnswer> {
        self.calls.lock().unwrap().push(MockCall::Grounded {
            instruction: instruction.to_string(),
        });

        match self.grounded.lock().unwrap().pop_front() {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(message)) => Err(RetrievalError::Upstream(message.into())),
            None => Ok(GroundedAnswer::default()),
        }
    }

    async fn generate_structured(&self, prompt: &str, _schema: Value) -> Result<Value> {
        self.calls.lock().unwrap().push(MockCall::Structured {
            prompt: prompt.to_string(),
        });

        match self.structured.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(RetrievalError::Upstream(message.into())),
            None => Ok(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_replays_queued_answers_in_order() {
        let model = MockModel::new()
            .with_grounded(GroundedAnswer::new("first"))
            .with_grounded(GroundedAnswer::new("second"));

        assert_eq!(model.generate_grounded("a").await.unwrap().text, "first");
        assert_eq!(model.generate_grounded("b").await.unwrap().text, "second");
        // Exhausted queue falls back to the default
        assert_eq!(model.generate_grounded("c").await.unwrap().text, "");
    }

    #[tokio::test]
    async fn test_mock_failure_injection() {
        let model = MockModel::new().with_structured_failure("boom");
        let err = model
            .generate_structured("p", json!({}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let model = MockModel::new().with_structured(json!({"matches": []}));
        model.generate_structured("prompt text", json!({})).await.unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(&calls[0], MockCall::Structured { prompt } if prompt == "prompt text"));

        model.clear_calls();
        assert!(model.calls().is_empty());
    }
}
