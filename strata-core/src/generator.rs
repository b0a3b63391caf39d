//! Probabilistic growth of layered graphs.
//!
//! [`GraphGenerator::generate`] runs three passes over a fresh [`Graph`]:
//!
//! 1. grey: breadth-first growth, one layer at a time, with a branching
//!    probability that falls linearly from `1.0` at the root;
//! 2. green: an independent self-loop trial for every vertex;
//! 3. yellow: for each pair of adjacent layers, a bounded number of random
//!    picks that connect a vertex to an unconnected vertex one layer deeper.
//!
//! One RNG instance drives all passes, so a seeded generator replays exactly.

mod params;
mod rng;

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::graph::{Depth, EdgeColor, Graph, Vertex, VertexId};

pub use self::{
    params::{DEFAULT_SELF_LOOP_PROBABILITY, GeneratorParams},
    rng::derive_seed,
};

/// Builds layered graphs from a [`GeneratorParams`] configuration.
///
/// # Examples
/// ```
/// use strata_core::{GeneratorParams, GraphGenerator};
///
/// let params = GeneratorParams::new(3, 2)
///     .expect("depth is positive")
///     .with_rng_seed(11);
/// let generator = GraphGenerator::new(params);
/// let graph = generator.generate();
///
/// assert_eq!(graph.layer(0).len(), 1);
/// assert!(graph.layer(1).len() <= 2);
/// assert!(graph.layer(2).len() <= 4);
/// assert_eq!(graph, generator.generate());
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    params: GeneratorParams,
}

impl GraphGenerator {
    /// Creates a generator for the supplied parameters.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Parameters this generator was built with.
    #[must_use]
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generates a graph, seeding a fresh RNG from the configured seed or
    /// from OS entropy when none is set.
    #[must_use]
    pub fn generate(&self) -> Graph {
        let mut rng = rng::build_rng(self.params.rng_seed());
        self.generate_with_rng(&mut rng)
    }

    /// Generates a graph drawing every random decision from `rng`.
    #[instrument(
        name = "core.generate",
        skip(self, rng),
        fields(
            target_depth = self.params.target_depth(),
            layer_branching_factor = self.params.layer_branching_factor(),
        ),
    )]
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Graph {
        let mut graph = Graph::new();
        let root = graph.add_vertex();
        let schedule = ProbabilitySchedule::for_target_depth(self.params.target_depth());

        if let Some(schedule) = schedule {
            self.grow_grey_layers(&mut graph, root, schedule, rng);
        }
        self.add_green_loops(&mut graph, rng);
        if let Some(schedule) = schedule {
            add_yellow_edges(&mut graph, schedule, rng);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph generated"
        );
        graph
    }

    fn grow_grey_layers<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        root: VertexId,
        schedule: ProbabilitySchedule,
        rng: &mut R,
    ) {
        let mut frontier = vec![root];
        for depth in 0..self.params.target_depth().saturating_sub(1) {
            if frontier.is_empty() {
                break;
            }
            let probability = schedule.growth(depth);
            let mut next = Vec::new();
            for &parent in &frontier {
                for _ in 0..self.params.layer_branching_factor() {
                    if rng.gen_bool(probability) {
                        let child = graph.add_vertex();
                        graph.add_edge(parent, child, EdgeColor::Grey);
                        next.push(child);
                    }
                }
            }
            debug!(depth, probability, created = next.len(), "grey layer grown");
            frontier = next;
        }
    }

    fn add_green_loops<R: Rng + ?Sized>(&self, graph: &mut Graph, rng: &mut R) {
        let probability = self.params.self_loop_probability();
        let vertices: Vec<VertexId> = graph.vertices().iter().map(Vertex::id).collect();
        let mut added = 0_usize;
        for vertex in vertices {
            if rng.gen_bool(probability) {
                graph.add_edge(vertex, vertex, EdgeColor::Green);
                added += 1;
            }
        }
        debug!(added, "green loops added");
    }
}

fn add_yellow_edges<R: Rng + ?Sized>(graph: &mut Graph, schedule: ProbabilitySchedule, rng: &mut R) {
    let layers = graph.layers().to_vec();
    for (depth, pair) in layers.windows(2).enumerate() {
        let [sources, targets] = pair else {
            continue;
        };
        let probability = schedule.connection(depth);
        let mut added = 0_usize;
        for &source in sources {
            if !rng.gen_bool(probability) {
                continue;
            }
            // Picks are drawn with replacement, so a small layer may exhaust
            // its attempts on vertices that are already connected.
            for _ in 0..targets.len() {
                let Some(&target) = targets.choose(rng) else {
                    break;
                };
                if graph.add_connective_edge(source, target).is_some() {
                    added += 1;
                    break;
                }
            }
        }
        debug!(depth, probability, added, "yellow edges added");
    }
}

/// Depth-dependent probabilities shared by the grey and yellow passes.
#[derive(Clone, Copy, Debug)]
struct ProbabilitySchedule {
    step: f64,
}

impl ProbabilitySchedule {
    /// Returns `None` for single-layer graphs, which have no step to divide
    /// by and no layers to grow or connect.
    fn for_target_depth(target_depth: usize) -> Option<Self> {
        let span = target_depth.checked_sub(1).filter(|&span| span > 0)?;
        Some(Self {
            step: (span as f64).recip(),
        })
    }

    fn growth(self, depth: Depth) -> f64 {
        (1.0 - self.step * depth as f64).clamp(0.0, 1.0)
    }

    /// Rises from `1.0` by one step per layer; clamped because it starts at
    /// certainty.
    fn connection(self, depth: Depth) -> f64 {
        (1.0 + self.step * depth as f64).clamp(0.0, 1.0)
    }
}
