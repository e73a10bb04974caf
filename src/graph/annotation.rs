//! Addresses, depth parity and cut marks for every context of a graph.
//!
//! The annotation borrows the graph and is discarded once a candidate
//! enumeration is done, so it can never describe a graph that has since
//! been edited.

use super::{Address, Graph};
use crate::logging::targets;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    /// Inside an even number of cuts.
    Positive,
    /// Inside an odd number of cuts.
    Negative,
}

impl Parity {
    pub fn flip(self) -> Parity {
        match self {
            Parity::Positive => Parity::Negative,
            Parity::Negative => Parity::Positive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutMark {
    Root,
    /// A cut with siblings, or whose parent holds atoms.
    Plain,
    /// The only content of its parent, which makes the parent a double cut.
    Enclosed,
}

#[derive(Clone, Debug)]
pub struct Site<'g> {
    pub graph: &'g Graph,
    pub address: Address,
    pub parent: Option<usize>,
    /// Indices of the sites of this context's subgraphs.
    pub children: Range<usize>,
    pub parity: Parity,
    pub mark: CutMark,
}

impl<'g> Site<'g> {
    fn new(graph: &'g Graph, address: Address, parent: Option<usize>) -> Site<'g> {
        Site {
            graph,
            address,
            parent,
            children: 0..0,
            parity: Parity::Positive,
            mark: CutMark::Root,
        }
    }

    /// The address of the atom at `index` within this context's atoms.
    pub fn atom_address(&self, index: usize) -> Address {
        self.address.child(self.graph.num_subgraphs() + index)
    }
}

/// Every context of a graph in breadth-first order, root first.
///
/// Breadth-first order keeps the subgraphs of a context in adjacent sites.
pub struct Annotation<'g> {
    sites: Vec<Site<'g>>,
}

impl<'g> Annotation<'g> {
    pub fn new(root: &'g Graph) -> Annotation<'g> {
        let mut annotation = Annotation { sites: Vec::new() };

        annotation.assign_paths(root);
        annotation.assign_parity();
        annotation.assign_cut_marks();

        log::trace!(target: targets::ANNOTATION, "Annotated {} contexts of {}", annotation.sites.len(), root);

        annotation
    }

    fn assign_paths(&mut self, root: &'g Graph) {
        self.sites.clear();
        self.sites.push(Site::new(root, Address::root(), None));

        let mut next = 0;
        while next < self.sites.len() {
            let graph = self.sites[next].graph;
            let first = self.sites.len();

            for (i, subgraph) in graph.subgraphs.iter().enumerate() {
                let address = self.sites[next].address.child(i);
                self.sites.push(Site::new(subgraph, address, Some(next)));
            }

            self.sites[next].children = first..self.sites.len();
            next += 1;
        }
    }

    fn assign_parity(&mut self) {
        for i in 0..self.sites.len() {
            self.sites[i].parity = match self.sites[i].parent {
                Some(parent) => self.sites[parent].parity.flip(),
                None => Parity::Positive,
            };
        }
    }

    fn assign_cut_marks(&mut self) {
        for i in 0..self.sites.len() {
            self.sites[i].mark = match self.sites[i].parent {
                Some(parent) if self.sites[parent].graph.is_double_cut() => CutMark::Enclosed,
                Some(_) => CutMark::Plain,
                None => CutMark::Root,
            };
        }
    }

    pub fn root(&self) -> &Site<'g> {
        &self.sites[0]
    }

    pub fn sites(&self) -> &[Site<'g>] {
        &self.sites
    }

    pub fn site(&self, index: usize) -> &Site<'g> {
        &self.sites[index]
    }

    pub fn children(&self, site: &Site<'g>) -> &[Site<'g>] {
        &self.sites[site.children.clone()]
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
