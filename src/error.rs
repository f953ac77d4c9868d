use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ArborescenceError {
    #[error("Vertex {index} is not present in the graph")]
    #[diagnostic(
        code(arborescence::missing_vertex),
        help("Both endpoints must be added with add_vertex before an edge can connect them")
    )]
    MissingVertex { index: usize },

    #[error("Cannot select a root: the graph has no vertices")]
    #[diagnostic(
        code(arborescence::empty_graph),
        help("Add at least one vertex before asking for a root or an arborescence")
    )]
    EmptyGraph,

    #[error("Income-edge tracking is disabled on the input graph")]
    #[diagnostic(
        code(arborescence::income_tracking_disabled),
        help("Call fill_income_edges(true) on the graph before invoking the engine")
    )]
    IncomeTrackingDisabled,

    #[error("Duplicate vertex index {index} in graph description")]
    #[diagnostic(
        code(arborescence::duplicate_vertex),
        help("Vertex indices must be unique within one graph description")
    )]
    DuplicateVertexIndex { index: usize },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(arborescence::json_error),
        help("Check that the graph description is well-formed JSON")
    )]
    Json(#[from] serde_json::Error),
}
