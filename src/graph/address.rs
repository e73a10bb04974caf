use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// The position of an element relative to the root of a graph.
///
/// At each node, indices `0..num_subgraphs` select a subgraph and
/// `num_subgraphs..size` select an atom. Only the last index of an
/// address may select an atom.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Vec<usize>);

impl Address {
    pub fn root() -> Address {
        Address(Vec::new())
    }

    pub fn child(&self, index: usize) -> Address {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);

        Address(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The index of the addressed element within its parent, and the
    /// address of that parent.
    pub fn split_last(&self) -> Option<(usize, &[usize])> {
        self.0.split_last().map(|(&last, parent)| (last, parent))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for Address {
    fn from(indices: Vec<usize>) -> Self {
        Address(indices)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut indices = self.0.iter();

        if let Some(first) = indices.next() {
            write!(f, "{}", first)?;
        }

        for index in indices {
            write!(f, " {}", index)?;
        }

        Ok(())
    }
}

impl FromStr for Address {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|index| !index.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<usize>, _>>()
            .map(Address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_the_parent() {
        let address = Address::root().child(2).child(0);

        assert_eq!(address.indices(), &[2, 0]);
        assert_eq!(address.split_last(), Some((0, &[2][..])));
    }

    #[test]
    fn root_has_nothing_to_split() {
        assert_eq!(Address::root().split_last(), None);
        assert!(Address::root().is_empty());
    }

    #[test]
    fn displays_indices_separated_by_spaces() {
        assert_eq!(Address::from(vec![0, 1, 12]).to_string(), "0 1 12");
        assert_eq!(Address::root().to_string(), "");
    }

    #[test]
    fn parses_whitespace_or_comma_separated_indices() {
        assert_eq!("0 1  2".parse::<Address>(), Ok(Address::from(vec![0, 1, 2])));
        assert_eq!("3,4".parse::<Address>(), Ok(Address::from(vec![3, 4])));
        assert_eq!("".parse::<Address>(), Ok(Address::root()));
        assert!("0 x".parse::<Address>().is_err());
    }
}
