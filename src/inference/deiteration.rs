use crate::err::InferenceError;
use crate::graph::annotation::Annotation;
use crate::graph::{Address, Graph};
use crate::logging::targets;
use std::collections::VecDeque;

fn push_unique(paths: &mut Vec<Address>, address: Address) {
    if !paths.contains(&address) {
        paths.push(address);
    }
}

/// A context holding exactly one cut, which in turn holds exactly one atom.
fn encloses_single_literal(graph: &Graph) -> bool {
    match graph.subgraphs() {
        [only] => only.num_atoms() == 1 && only.num_subgraphs() == 0,
        _ => false,
    }
}

/// Records every occurrence of `atom` in the contexts reachable from the site
/// at `start`, without descending below contexts that enclose a single literal.
fn search_atom(annotation: &Annotation, atom: &str, start: usize, paths: &mut Vec<Address>) {
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(index) = queue.pop_front() {
        let site = annotation.site(index);

        for (i, a) in site.graph.atoms().iter().enumerate() {
            if a == atom {
                push_unique(paths, site.atom_address(i));
            }
        }

        if encloses_single_literal(site.graph) {
            continue;
        }

        queue.extend(site.children.clone());
    }
}

/// Records every subgraph equal to `target` strictly below the site at `start`.
fn search_graph(annotation: &Annotation, target: &Graph, start: usize, paths: &mut Vec<Address>) {
    let target = target.canonical_form();

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(index) = queue.pop_front() {
        for child in annotation.site(index).children.clone() {
            let site = annotation.site(child);

            if site.graph.canonical_form() == target {
                push_unique(paths, site.address.clone());
            }

            queue.push_back(child);
        }
    }
}

impl Graph {
    /// Addresses of the elements that repeat an atom or subgraph of an
    /// enclosing context.
    ///
    /// For each context and each of its subgraphs, the atoms of the context are
    /// searched for inside the subgraph, as are the subgraphs of the context
    /// (the subgraph itself included).
    pub fn possible_deiterations(&self) -> Vec<Address> {
        let annotation = Annotation::new(self);
        let mut paths = Vec::new();

        for site in annotation.sites() {
            for child in site.children.clone() {
                for atom in site.graph.atoms() {
                    search_atom(&annotation, atom, child, &mut paths);
                }

                for subgraph in site.graph.subgraphs() {
                    search_graph(&annotation, subgraph, child, &mut paths);
                }
            }
        }

        log::debug!(target: targets::INFERENCE, "{} deiterations in {}", paths.len(), self);

        paths
    }

    /// Removes the repeated subgraph or atom at `address`.
    pub fn deiterate(&self, address: &Address) -> Result<Graph, InferenceError> {
        self.without_element(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use insta::assert_display_snapshot;

    fn addresses(paths: &[&[usize]]) -> Vec<Address> {
        paths.iter().map(|path| Address::from(path.to_vec())).collect()
    }

    #[test]
    fn an_atom_repeated_inside_a_cut() {
        let graph = parse("(a, [a])").unwrap();

        assert_eq!(graph.possible_deiterations(), addresses(&[&[0, 0]]));
    }

    #[test]
    fn deiterating_an_atom_leaves_an_empty_cut() {
        let graph = parse("(a, [a])").unwrap();
        let result = graph.deiterate(&Address::from(vec![0, 0])).unwrap();

        assert_display_snapshot!(result, @"([], a)");
        assert_eq!(result, parse("(a, [])").unwrap());
    }

    #[test]
    fn a_subgraph_repeated_inside_a_sibling() {
        let graph = parse("([p], [[p], q])").unwrap();

        assert_display_snapshot!(graph, @"([[p], q], [p])");
        assert_eq!(graph.possible_deiterations(), addresses(&[&[0, 0]]));

        let result = graph.deiterate(&Address::from(vec![0, 0])).unwrap();
        assert_eq!(result, parse("([p], [q])").unwrap());
    }

    #[test]
    fn atoms_are_found_at_any_depth() {
        let graph = parse("(a, [b, [a, c]])").unwrap();

        assert_eq!(graph.possible_deiterations(), addresses(&[&[0, 0, 0]]));
    }

    #[test]
    fn search_stops_above_a_single_literal() {
        let graph = parse("(a, [[[a]]])").unwrap();

        assert!(graph.possible_deiterations().is_empty());
    }

    #[test]
    fn atoms_beside_a_single_literal_are_still_found() {
        let graph = parse("(a, [[a], a])").unwrap();

        assert_eq!(graph.possible_deiterations(), addresses(&[&[0, 1], &[0, 0, 0]]));
    }

    #[test]
    fn a_subgraph_repeated_deeper_inside_a_sibling() {
        let graph = parse("([[y], x], [[[y], x], z])").unwrap();

        assert_display_snapshot!(graph, @"([[[y], x], z], [[y], x])");
        assert_eq!(graph.possible_deiterations(), addresses(&[&[0, 0]]));
    }

    #[test]
    fn nothing_to_deiterate_without_repetition() {
        assert!(parse("(a, [b], [[c]])").unwrap().possible_deiterations().is_empty());
    }
}
