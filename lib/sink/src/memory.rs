use crate::error::{Result, SinkError};
use crate::sink::GraphSink;
use bytes::Bytes;
use parking_lot::Mutex;

/// Which call a [`MemorySink`] refuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rejection {
    #[default]
    None,
    Schema,
    Mutation,
}

/// In-process sink that keeps everything it is sent.
#[derive(Debug, Default)]
pub struct MemorySink {
    schemas: Mutex<Vec<String>>,
    mutations: Mutex<Vec<(Bytes, bool)>>,
    reject: Rejection,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(reject: Rejection) -> Self {
        Self {
            reject,
            ..Self::default()
        }
    }

    pub fn schemas(&self) -> Vec<String> {
        self.schemas.lock().clone()
    }

    /// Payloads received so far with their commit flag.
    pub fn mutations(&self) -> Vec<(Bytes, bool)> {
        self.mutations.lock().clone()
    }
}

impl GraphSink for MemorySink {
    async fn alter(&self, schema: &str) -> Result<()> {
        if self.reject == Rejection::Schema {
            return Err(SinkError::Schema("rejected by memory sink".to_string()));
        }
        self.schemas.lock().push(schema.to_string());
        Ok(())
    }

    async fn mutate(&self, payload: Bytes, commit_now: bool) -> Result<()> {
        if self.reject == Rejection::Mutation {
            return Err(SinkError::Mutation("rejected by memory sink".to_string()));
        }
        self.mutations.lock().push((payload, commit_now));
        Ok(())
    }
}
