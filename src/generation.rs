use crate::graph::Graph;
use crate::logging::targets;
use rand::prelude::*;

/// The atoms random graphs are drawn from. The pool is small so that atoms
/// and subgraphs repeat, which is what deiteration needs.
pub const ATOMS: &[&str] = &["a", "b", "c", "d"];

/// A random canonical sheet of assertion, nested at most `max_depth` cuts deep.
pub fn generate_graph<G: Rng>(rng: &mut G, max_depth: usize) -> Graph {
    let mut graph = generate_context(rng, Graph::sheet(), max_depth);
    graph.canonicalize();

    log::trace!(target: targets::GENERATION, "Generated {}", graph);

    graph
}

fn generate_context<G: Rng>(rng: &mut G, mut context: Graph, depth: usize) -> Graph {
    let atom_count = rng.gen_range(0, 3);
    for _ in 0..atom_count {
        if let Some(atom) = ATOMS.choose(rng) {
            context.atoms.push(atom.to_string());
        }
    }

    if depth > 0 {
        let cut_count = rng.gen_range(0, 3);
        for _ in 0..cut_count {
            let cut = generate_context(rng, Graph::cut(), depth - 1);
            context.subgraphs.push(cut);
        }
    }

    context
}

#[cfg(test)]
mod arbitrary {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for Graph {
        fn arbitrary<G: Gen>(g: &mut G) -> Graph {
            let max_depth = g.size().min(4);

            generate_graph(g, max_depth)
        }
    }
}
