use anyhow::{Context, Result};
use filmpath_core::{
    CollaborationGraph, GraphConfig, RecordField, RecordIndex, build_graph, load_graph, load_records,
};
use std::path::{Path, PathBuf};

use crate::args::GraphArgs;

pub struct FilmPathApp {
    pub records_path: PathBuf,
}

impl FilmPathApp {
    pub fn new(records_path: Option<PathBuf>) -> Result<Self> {
        let records_path = match records_path {
            Some(path) => path,
            None => default_records_path()?,
        };

        Ok(Self { records_path })
    }

    pub fn load_index(&self) -> Result<RecordIndex> {
        let records = load_records(&self.records_path).with_context(|| {
            format!(
                "Could not load records from {:?} (use --records or FILMPATH_RECORDS)",
                self.records_path
            )
        })?;

        tracing::info!(records = records.len(), "record set ready");
        Ok(RecordIndex::new(records))
    }

    /// The collaboration graph a query runs on: a saved graph when one is
    /// given, otherwise built from the records.
    pub fn load_graph(&self, graph_args: &GraphArgs) -> Result<CollaborationGraph> {
        match &graph_args.graph {
            Some(graph_path) => load_saved_graph(graph_path),
            None => {
                let config = GraphConfig::new(graph_args.self_loops);
                self.build_graph(graph_args.field.into(), &config)
            }
        }
    }

    pub fn build_graph(&self, field: RecordField, config: &GraphConfig) -> Result<CollaborationGraph> {
        let index = self.load_index()?;
        let graph = build_graph(index.records(), field, config);

        tracing::info!(
            %field,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built collaboration graph"
        );
        Ok(graph)
    }
}

fn load_saved_graph(graph_path: &Path) -> Result<CollaborationGraph> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("Could not load graph from {:?}", graph_path))?;

    tracing::info!(nodes = graph.node_count(), "loaded saved graph");
    Ok(graph)
}

pub fn default_records_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not find a data directory")?;
    Ok(data_dir.join("filmpath").join("records.json"))
}
