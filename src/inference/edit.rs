use crate::err::InferenceError;
use crate::graph::{Address, Graph};
use crate::logging::targets;

/// Splits `address` into the context it points into and the index of the
/// addressed element there, borrowing that context from `graph`.
pub(super) fn context_mut<'g>(
    graph: &'g mut Graph,
    address: &Address,
) -> Result<(&'g mut Graph, usize), InferenceError> {
    let (last, parent) = address.split_last().ok_or(InferenceError::EmptyAddress)?;

    let mut context = graph;
    for &index in parent {
        context = context
            .subgraphs
            .get_mut(index)
            .ok_or_else(|| rejected(address))?;
    }

    Ok((context, last))
}

pub(super) fn rejected(address: &Address) -> InferenceError {
    log::warn!(target: targets::INFERENCE, "Address [{}] does not resolve", address);

    InferenceError::InvalidAddress(address.clone())
}

impl Graph {
    /// A copy of this graph without the subgraph or atom at `address`.
    pub(super) fn without_element(&self, address: &Address) -> Result<Graph, InferenceError> {
        let mut graph = self.clone();
        let (context, index) = context_mut(&mut graph, address)?;

        if index < context.num_subgraphs() {
            context.subgraphs.remove(index);
        } else if index < context.size() {
            let atom = index - context.num_subgraphs();
            context.atoms.remove(atom);
        } else {
            return Err(rejected(address));
        }

        Ok(graph)
    }
}
