//! Error types shared by every stage of the family pipeline.

use thiserror::Error;

use crate::vertex::Vertex;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid graph size: {0}")]
    InvalidSize(String),

    #[error("vertex {0} is not in the graph")]
    InvalidVertex(Vertex),

    #[error("no independent {r}-subsets exist, cannot build a family")]
    EmptyFamily { r: usize },

    #[error("invalid vertex label: {0:?}")]
    InvalidLabel(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
