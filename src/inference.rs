//! The transformation rules of the alpha calculus.
//!
//! Every rule works on a copy: the graph a rule is applied to is never
//! edited, and the result is not re-sorted. Candidate addresses are only
//! meaningful for the graph they were enumerated on.

mod deiteration;
mod double_cut;
mod edit;
mod erasure;

use crate::err::InferenceError;
use crate::graph::{Address, Graph};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inference {
    DoubleCutInsertion,
    DoubleCutRemoval,
    Erasure,
    Deiteration,
}

impl Inference {
    pub fn all() -> &'static [Inference] {
        &[
            Inference::DoubleCutInsertion,
            Inference::DoubleCutRemoval,
            Inference::Erasure,
            Inference::Deiteration,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Inference::DoubleCutInsertion => "double-cut-insertion",
            Inference::DoubleCutRemoval => "double-cut",
            Inference::Erasure => "erasure",
            Inference::Deiteration => "deiteration",
        }
    }

    /// Whether applying the rule always removes something from the graph.
    pub fn shrinks(self) -> bool {
        !matches!(self, Inference::DoubleCutInsertion)
    }

    pub fn candidates(self, graph: &Graph) -> Vec<Address> {
        match self {
            Inference::DoubleCutInsertion => graph.possible_double_cut_insertions(),
            Inference::DoubleCutRemoval => graph.possible_double_cuts(),
            Inference::Erasure => graph.possible_erasures(),
            Inference::Deiteration => graph.possible_deiterations(),
        }
    }

    pub fn apply(self, graph: &Graph, address: &Address) -> Result<Graph, InferenceError> {
        log::debug!(target: crate::logging::targets::INFERENCE, "Applying {} at [{}] to {}", self, address, graph);

        match self {
            Inference::DoubleCutInsertion => graph.insert_double_cut(address),
            Inference::DoubleCutRemoval => graph.remove_double_cut(address),
            Inference::Erasure => graph.erase(address),
            Inference::Deiteration => graph.deiterate(address),
        }
    }
}

impl Display for Inference {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownInference(pub String);

impl Display for UnknownInference {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "unknown rule '{}'", self.0)
    }
}

impl std::error::Error for UnknownInference {}

impl FromStr for Inference {
    type Err = UnknownInference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Inference::all()
            .iter()
            .copied()
            .find(|inference| inference.name() == s)
            .ok_or_else(|| UnknownInference(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use quickcheck_macros::quickcheck;

    #[test]
    fn names_round_trip() {
        for &inference in Inference::all() {
            assert_eq!(inference.to_string().parse::<Inference>(), Ok(inference));
        }

        assert_eq!(
            "iteration".parse::<Inference>(),
            Err(UnknownInference(String::from("iteration")))
        );
    }

    #[test]
    fn dispatches_to_the_rule() {
        let graph = parse("([[]], d)").unwrap();
        let at = Address::from(vec![0]);

        assert_eq!(Inference::DoubleCutRemoval.candidates(&graph), vec![at.clone()]);
        assert_eq!(
            Inference::DoubleCutRemoval.apply(&graph, &at).unwrap(),
            parse("(d)").unwrap()
        );
        assert_eq!(
            Inference::Erasure.apply(&graph, &at).unwrap(),
            parse("(d)").unwrap()
        );
    }

    #[test]
    fn the_empty_address_is_rejected_by_every_rule() {
        let graph = parse("(a, [a])").unwrap();

        for &inference in Inference::all() {
            assert_eq!(
                inference.apply(&graph, &Address::root()),
                Err(InferenceError::EmptyAddress)
            );
        }
    }

    #[quickcheck]
    fn candidates_always_apply(graph: Graph) {
        for &inference in Inference::all() {
            for address in inference.candidates(&graph) {
                let result = inference.apply(&graph, &address).unwrap();

                if inference.shrinks() {
                    assert!(result.total_size() < graph.total_size());
                } else {
                    assert_eq!(result.total_size(), graph.total_size() + 2);
                }
            }
        }
    }

    #[quickcheck]
    fn rules_leave_their_input_untouched(graph: Graph) {
        let before = graph.to_string();

        for &inference in Inference::all() {
            for address in inference.candidates(&graph) {
                inference.apply(&graph, &address).unwrap();
            }
        }

        assert_eq!(graph.to_string(), before);
    }
}
