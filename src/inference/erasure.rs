use crate::err::InferenceError;
use crate::graph::annotation::{Annotation, CutMark, Parity};
use crate::graph::{Address, Graph};
use crate::logging::targets;

impl Graph {
    /// Addresses of the elements that may be erased.
    ///
    /// Every element of the root is a candidate. Below the root, a plain cut in a
    /// negative context is a candidate, and a positive cut holding more than one
    /// atom contributes one address per atom index, counted from zero.
    pub fn possible_erasures(&self) -> Vec<Address> {
        let annotation = Annotation::new(self);
        let root = annotation.root();

        let mut paths: Vec<Address> = (0..self.size()).map(|i| root.address.child(i)).collect();

        for site in annotation.sites() {
            for child in annotation.children(site) {
                match (child.parity, child.mark) {
                    (Parity::Negative, CutMark::Plain) => {
                        if !paths.contains(&child.address) {
                            paths.push(child.address.clone());
                        }
                    }
                    (Parity::Positive, _) if child.graph.num_atoms() > 1 => {
                        for i in 0..child.graph.num_atoms() {
                            paths.push(child.address.child(i));
                        }
                    }
                    _ => {}
                }
            }
        }

        log::debug!(target: targets::INFERENCE, "{} erasures in {}", paths.len(), self);

        paths
    }

    /// Erases the subgraph or atom at `address`.
    pub fn erase(&self, address: &Address) -> Result<Graph, InferenceError> {
        self.without_element(address)
    }
}
