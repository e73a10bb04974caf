use existential_graphs::{Address, Graph};

pub fn show(graph: &Graph) -> String {
    format!(
        "{}\nsubgraphs: {}\natoms: {}\ntotal size: {}\n",
        graph,
        graph.num_subgraphs(),
        graph.num_atoms(),
        graph.total_size()
    )
}

/// One address per line.
pub fn addresses(paths: &[Address]) -> String {
    paths.iter().map(|path| format!("{}\n", path)).collect()
}
