use existential_graphs::{err::InferenceError, Address, Graph, Inference};

pub fn candidates(inference: Inference, graph: &Graph) -> String {
    inference
        .candidates(graph)
        .iter()
        .map(|address| format!("{}\n", address))
        .collect()
}

/// The result of the rule, re-sorted into canonical form.
pub fn apply(inference: Inference, graph: &Graph, address: &Address) -> Result<Graph, InferenceError> {
    inference
        .apply(graph, address)
        .map(Graph::canonical)
}
