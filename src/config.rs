use roadgraph_core::ParserOptions;
use roadgraph_sink::{DeliveryConfig, DgraphConfig};
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "./files/edge_antwerpen_subgraph_car.csv";

/// Everything one import run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Edge CSV to read.
    pub csv_path: PathBuf,
    pub parser: ParserOptions,
    pub delivery: DeliveryConfig,
    pub dgraph: DgraphConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            parser: ParserOptions::default(),
            delivery: DeliveryConfig::default(),
            dgraph: DgraphConfig::default(),
        }
    }
}
