//! Argument parsing and graph generation for the strata CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use strata_core::{
    DEFAULT_SELF_LOOP_PROBABILITY, GeneratorParams, GraphDocument, GraphGenerator, GraphSummary,
    StrataError, derive_seed,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::prompt::prompt_count;

const DEFAULT_OUTPUT_DIR: &str = "temp";

/// Top-level CLI options parsed by [`clap`].
///
/// Counts left unset on the command line are requested interactively.
#[derive(Debug, Parser, Clone)]
#[command(name = "strata", about = "Generate layered random graphs as JSON.")]
pub struct Cli {
    /// Number of layers in each graph, root included.
    #[arg(long)]
    pub depth: Option<usize>,

    /// Children each vertex attempts to grow in the next layer.
    #[arg(long = "new-vertices")]
    pub new_vertices: Option<usize>,

    /// Number of graphs to generate.
    #[arg(long)]
    pub graphs: Option<usize>,

    /// Base seed for reproducible output; graph `i` uses a seed derived from it.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a vertex receives a self-loop.
    #[arg(long = "self-loop-probability", default_value_t = DEFAULT_SELF_LOOP_PROBABILITY)]
    pub self_loop_probability: f64,

    /// Directory receiving one `graph_<index>.json` file per graph.
    #[arg(long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Include each edge's colour in the JSON output.
    #[arg(long = "with-colors")]
    pub with_colors: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading a prompt answer or writing the prompt failed.
    #[error("interactive prompt failed: {0}")]
    Prompt(#[source] io::Error),
    /// Input ended before a required value was supplied.
    #[error("input closed before {label} was provided")]
    InputClosed {
        /// Label of the value being requested.
        label: &'static str,
    },
    /// Creating the output directory or writing a graph file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing a graph to the output stream failed.
    #[error("failed to write graph output: {0}")]
    Output(#[source] io::Error),
    /// A graph could not be rendered as JSON.
    #[error("failed to serialise graph: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Generator configuration was rejected.
    #[error(transparent)]
    Core(#[from] StrataError),
}

/// Fully resolved generation settings.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Generator parameters shared by every graph in the batch.
    pub params: GeneratorParams,
    /// Number of graphs to generate.
    pub graphs: usize,
    /// Optional base seed.
    pub seed: Option<u64>,
    /// Directory receiving the JSON files.
    pub output_dir: PathBuf,
    /// Whether edge colours are included in the JSON.
    pub with_colors: bool,
}

/// Outcome for one generated graph.
#[derive(Debug, Clone)]
pub struct GraphReport {
    /// Position of the graph in the batch.
    pub index: usize,
    /// File the graph was written to.
    pub path: PathBuf,
    /// Shape statistics of the graph.
    pub summary: GraphSummary,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, Default)]
pub struct ExecutionSummary {
    /// One report per generated graph, in generation order.
    pub graphs: Vec<GraphReport>,
}

/// Resolves `cli`, prompting for missing counts, then generates every graph.
///
/// Prompts are written to `prompt` and answers read from `input`; each graph's
/// JSON goes to `output` (one line per graph) and to its file.
///
/// # Errors
/// Returns [`CliError`] when input, configuration, serialisation or output
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use clap::Parser;
/// # use strata_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output_dir = dir.path().to_str().ok_or("temp path is not UTF-8")?;
/// let cli = Cli::try_parse_from(["strata", "--graphs", "1", "--seed", "3", "--output-dir", output_dir])?;
/// let mut input = Cursor::new("3\n2\n");
/// let mut prompt = Vec::new();
/// let mut output = Vec::new();
/// let summary = run_cli(cli, &mut input, &mut prompt, &mut output)?;
/// assert_eq!(summary.graphs.len(), 1);
/// assert!(String::from_utf8(output)?.starts_with(r#"{"vertices":["#));
/// # Ok(())
/// # }
/// ```
pub fn run_cli<R, P, W>(
    cli: Cli,
    input: &mut R,
    prompt: &mut P,
    output: &mut W,
) -> Result<ExecutionSummary, CliError>
where
    R: BufRead + ?Sized,
    P: Write + ?Sized,
    W: Write + ?Sized,
{
    let request = resolve_request(cli, input, prompt)?;
    run_generation(&request, output)
}

/// Builds a [`GenerationRequest`], prompting for any count not given on the
/// command line.
///
/// # Errors
/// Returns [`CliError::Prompt`] or [`CliError::InputClosed`] when a prompt
/// cannot be answered, and [`CliError::Core`] when the parameters are invalid.
pub fn resolve_request<R, P>(
    cli: Cli,
    input: &mut R,
    prompt: &mut P,
) -> Result<GenerationRequest, CliError>
where
    R: BufRead + ?Sized,
    P: Write + ?Sized,
{
    let depth = match cli.depth {
        Some(depth) => depth,
        None => prompt_count(input, prompt, "Depth")?,
    };
    let new_vertices = match cli.new_vertices {
        Some(count) => count,
        None => prompt_count(input, prompt, "New vertices count")?,
    };
    let graphs = match cli.graphs {
        Some(count) => count,
        None => prompt_count(input, prompt, "Graphs count")?,
    };

    let params = GeneratorParams::new(depth, new_vertices)?
        .with_self_loop_probability(cli.self_loop_probability)?;

    Ok(GenerationRequest {
        params,
        graphs,
        seed: cli.seed,
        output_dir: cli.output_dir,
        with_colors: cli.with_colors,
    })
}

/// Generates the requested graphs, writing each to `output` and to disk.
///
/// # Errors
/// Returns [`CliError::Io`] when the output directory or a graph file cannot
/// be written, [`CliError::Output`] when `output` rejects a write, and
/// [`CliError::Serialize`] when JSON rendering fails.
#[instrument(
    name = "cli.generate",
    err,
    skip(request, output),
    fields(
        depth = request.params.target_depth(),
        new_vertices = request.params.layer_branching_factor(),
        graphs = request.graphs,
        seed = field::Empty,
    ),
)]
pub fn run_generation<W>(
    request: &GenerationRequest,
    output: &mut W,
) -> Result<ExecutionSummary, CliError>
where
    W: Write + ?Sized,
{
    if let Some(seed) = request.seed {
        Span::current().record("seed", seed);
    }
    prepare_output_dir(&request.output_dir)?;

    let mut summary = ExecutionSummary::default();
    for index in 0..request.graphs {
        let params = match request.seed {
            Some(base_seed) => request
                .params
                .clone()
                .with_rng_seed(derive_seed(base_seed, index)),
            None => request.params.clone(),
        };

        info!(graph = index, "generation started");
        let graph = GraphGenerator::new(params).generate();
        let graph_summary = GraphSummary::of(&graph);
        info!(graph = index, summary = %graph_summary, "generation finished");

        let document = if request.with_colors {
            GraphDocument::from_graph_with_colors(&graph)
        } else {
            GraphDocument::from_graph(&graph)
        };
        let json = serde_json::to_string(&document)?;
        writeln!(output, "{json}").map_err(CliError::Output)?;

        let path = graph_file_path(&request.output_dir, index);
        write_graph_file(&path, &json)?;

        summary.graphs.push(GraphReport {
            index,
            path,
            summary: graph_summary,
        });
    }
    output.flush().map_err(CliError::Output)?;

    info!(graphs = summary.graphs.len(), "command completed");
    Ok(summary)
}

fn prepare_output_dir(path: &Path) -> Result<(), CliError> {
    fs::create_dir_all(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn graph_file_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("graph_{index}.json"))
}

fn write_graph_file(path: &Path, json: &str) -> Result<(), CliError> {
    fs::write(path, json).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
