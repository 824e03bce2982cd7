use crate::artifact::{write_artifact, ArtifactInfo};
use crate::error::Result;
use crate::payload::{checksum, encode};
use crate::sink::GraphSink;
use roadgraph_core::{edge_schema, EdgeRecord};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Where the serialized record set goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delivery {
    /// Local JSON file only.
    #[default]
    Artifact,
    /// Graph store only.
    Sink,
    /// Graph store, then the local JSON file.
    Both,
}

impl Delivery {
    pub fn uses_sink(&self) -> bool {
        matches!(self, Delivery::Sink | Delivery::Both)
    }

    pub fn writes_artifact(&self) -> bool {
        matches!(self, Delivery::Artifact | Delivery::Both)
    }
}

impl FromStr for Delivery {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "artifact" => Ok(Delivery::Artifact),
            "sink" => Ok(Delivery::Sink),
            "both" => Ok(Delivery::Both),
            other => Err(format!(
                "unknown delivery {:?}, expected artifact, sink or both",
                other
            )),
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delivery::Artifact => "artifact",
            Delivery::Sink => "sink",
            Delivery::Both => "both",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub delivery: Delivery,
    pub output: PathBuf,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            delivery: Delivery::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// What a delivery produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub records: usize,
    pub payload_bytes: usize,
    pub checksum: String,
    pub committed: bool,
    pub artifact: Option<ArtifactInfo>,
}

/// Apply the schema, then send the serialized records to the sink and/or
/// the local artifact, as `config.delivery` selects.
///
/// The schema is applied before anything is written; a rejected schema
/// stops the delivery with nothing committed and no artifact.
pub async fn deliver<S: GraphSink>(
    sink: &S,
    records: &[EdgeRecord],
    config: &DeliveryConfig,
) -> Result<DeliveryOutcome> {
    if config.delivery.uses_sink() {
        sink.alter(&edge_schema()).await?;
        info!("Schema applied");
    }

    let payload = encode(records)?;
    let digest = checksum(&payload);
    info!("Serialized {} records ({} bytes, sha256 {})", records.len(), payload.len(), digest);

    let mut committed = false;
    if config.delivery.uses_sink() {
        sink.mutate(payload.clone(), true).await?;
        committed = true;
        info!("Mutation committed");
    }

    let artifact = if config.delivery.writes_artifact() {
        let info = write_artifact(&config.output, &payload)?;
        info!("Wrote artifact {:?}", info.path);
        Some(info)
    } else {
        None
    };

    Ok(DeliveryOutcome {
        records: records.len(),
        payload_bytes: payload.len(),
        checksum: digest,
        committed,
        artifact,
    })
}
