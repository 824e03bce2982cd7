use crate::error::Result;
use bytes::Bytes;
use std::future::Future;

/// A graph store that accepts a schema declaration and JSON mutations.
///
/// `mutate` receives the payload produced by [`crate::payload::encode`]:
/// a JSON array of node objects.
pub trait GraphSink {
    /// Apply a schema declaration.
    fn alter(&self, schema: &str) -> impl Future<Output = Result<()>> + Send;

    /// Apply one batch mutation, committing it immediately when
    /// `commit_now` is set.
    fn mutate(&self, payload: Bytes, commit_now: bool) -> impl Future<Output = Result<()>> + Send;
}
