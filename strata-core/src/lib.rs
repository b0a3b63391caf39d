//! Strata core library.
//!
//! Generates synthetic, depth-layered graphs and classifies every edge by the
//! relative depth of its endpoints. [`GraphGenerator`] owns the randomised
//! growth process; [`Graph`] is the id-indexed structure it fills in.

mod document;
mod error;
mod generator;
mod graph;
mod summary;

pub use crate::{
    document::GraphDocument,
    error::{Result, StrataError, StrataErrorCode},
    generator::{DEFAULT_SELF_LOOP_PROBABILITY, GeneratorParams, GraphGenerator, derive_seed},
    graph::{Depth, Edge, EdgeColor, EdgeId, Graph, Vertex, VertexId},
    summary::GraphSummary,
};
