// sparkify-core/src/application/testing.rs

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::quality::Scalar;
use crate::error::SparkifyError;
use crate::ports::executor::SqlExecutor;

/// Scripted response for one `query_scalar` call.
pub enum Scripted {
    Value(i64),
    Float(f64),
    NoRow,
    Fail(&'static str),
}

#[derive(Clone, Default)]
pub struct MockExecutor {
    pub executed: Arc<Mutex<Vec<String>>>,
    pub queried: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    fail_on_execute: Option<&'static str>,
}

#[allow(clippy::unwrap_used)]
impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Scripted>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            ..Self::default()
        }
    }

    pub fn failing_on(pattern: &'static str) -> Self {
        Self {
            fail_on_execute: Some(pattern),
            ..Self::default()
        }
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.executed.lock().unwrap().len() + self.queried.lock().unwrap().len()
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl SqlExecutor for MockExecutor {
    async fn execute(&self, sql: &str) -> Result<(), SparkifyError> {
        self.executed.lock().unwrap().push(sql.to_string());
        match self.fail_on_execute {
            Some(pattern) if sql.contains(pattern) => {
                Err(SparkifyError::InternalError(format!("refused: {}", pattern)))
            }
            _ => Ok(()),
        }
    }

    async fn query_scalar(&self, sql: &str) -> Result<Option<Scalar>, SparkifyError> {
        self.queried.lock().unwrap().push(sql.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Scripted::Value(v)) => Ok(Some(Scalar::Int(v))),
            Some(Scripted::Float(v)) => Ok(Some(Scalar::Float(v))),
            Some(Scripted::NoRow) | None => Ok(None),
            Some(Scripted::Fail(msg)) => Err(SparkifyError::InternalError(msg.to_string())),
        }
    }

    fn engine_name(&self) -> &str {
        "mock"
    }
}
