// JSON payload shared by the graph store mutation and the local artifact
use crate::error::Result;
use bytes::Bytes;
use roadgraph_core::EdgeRecord;
use sha2::{Digest, Sha256};

/// Serialize records as a compact JSON array, in record order.
///
/// The encoding is deterministic, so equal inputs yield byte-identical
/// payloads.
pub fn encode(records: &[EdgeRecord]) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(records)?))
}

/// Decode a payload back into records.
pub fn decode(payload: &[u8]) -> Result<Vec<EdgeRecord>> {
    Ok(serde_json::from_slice(payload)?)
}

/// Hex SHA-256 of a payload.
pub fn checksum(payload: &[u8]) -> String {
    format!("{:x}", Sha256::digest(payload))
}
