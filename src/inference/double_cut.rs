use super::edit::{context_mut, rejected};
use crate::err::InferenceError;
use crate::graph::annotation::Annotation;
use crate::graph::{Address, Graph};
use crate::logging::targets;
use std::mem;

impl Graph {
    /// Addresses of every cut whose only content is a single other cut.
    ///
    /// The root is never a candidate, even when it has that shape.
    pub fn possible_double_cuts(&self) -> Vec<Address> {
        let annotation = Annotation::new(self);

        let paths: Vec<Address> = annotation.sites()[1..]
            .iter()
            .filter(|site| site.graph.is_double_cut())
            .map(|site| site.address.clone())
            .collect();

        log::debug!(target: targets::INFERENCE, "{} double cuts in {}", paths.len(), self);

        paths
    }

    /// Removes the double cut at `address`, moving the content of its inner
    /// cut into the context that held the double cut.
    pub fn remove_double_cut(&self, address: &Address) -> Result<Graph, InferenceError> {
        let mut graph = self.clone();
        let (context, index) = context_mut(&mut graph, address)?;

        let outer = context.subgraphs.get(index).ok_or_else(|| rejected(address))?;
        if !outer.is_double_cut() {
            log::warn!(target: targets::INFERENCE, "No double cut at [{}]", address);
            return Err(InferenceError::NotADoubleCut(address.clone()));
        }

        let mut outer = context.subgraphs.remove(index);
        let inner = outer.subgraphs.remove(0);

        context.subgraphs.extend(inner.subgraphs);
        context.atoms.extend(inner.atoms);

        Ok(graph)
    }

    /// Addresses of every element that could be wrapped in a double cut.
    pub fn possible_double_cut_insertions(&self) -> Vec<Address> {
        let annotation = Annotation::new(self);

        annotation
            .sites()
            .iter()
            .flat_map(|site| (0..site.graph.size()).map(move |i| site.address.child(i)))
            .collect()
    }

    /// Wraps the element at `address` in two nested cuts.
    ///
    /// A subgraph is wrapped where it stands, so the double cut takes over its
    /// address. An atom leaves the atoms of its context and the double cut is
    /// appended to that context's subgraphs.
    pub fn insert_double_cut(&self, address: &Address) -> Result<Graph, InferenceError> {
        let mut graph = self.clone();
        let (context, index) = context_mut(&mut graph, address)?;

        if index < context.num_subgraphs() {
            let wrapped = mem::replace(&mut context.subgraphs[index], Graph::cut());
            context.subgraphs[index] = Graph::cut().with_subgraph(Graph::cut().with_subgraph(wrapped));
        } else if index < context.size() {
            let atom = context.atoms.remove(index - context.num_subgraphs());
            context
                .subgraphs
                .push(Graph::cut().with_subgraph(Graph::literal(&atom)));
        } else {
            return Err(rejected(address));
        }

        Ok(graph)
    }
}
