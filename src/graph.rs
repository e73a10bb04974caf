mod address;
pub mod annotation;

pub use address::Address;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// A context of an existential graph: either the sheet of assertion or a cut.
///
/// Subgraphs are the cuts nested directly inside this context. Graphs read by the
/// [parser](crate::parser) are canonical: atoms and subgraphs are both sorted,
/// subgraphs by their canonical form.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) is_sheet: bool,
    pub(crate) atoms: Vec<String>,
    pub(crate) subgraphs: Vec<Graph>,
}

/// An addressable element of a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element<'g> {
    Subgraph(&'g Graph),
    Atom(&'g str),
}

impl Graph {
    /// An empty sheet of assertion.
    pub fn sheet() -> Graph {
        Graph {
            is_sheet: true,
            atoms: Vec::new(),
            subgraphs: Vec::new(),
        }
    }

    /// An empty cut, `[]`.
    pub fn cut() -> Graph {
        Graph {
            is_sheet: false,
            atoms: Vec::new(),
            subgraphs: Vec::new(),
        }
    }

    /// A cut holding a single atom, e.g. `[a]`.
    pub fn literal(atom: &str) -> Graph {
        Graph {
            is_sheet: false,
            atoms: vec![atom.to_string()],
            subgraphs: Vec::new(),
        }
    }

    pub fn with_atom(mut self, atom: &str) -> Graph {
        self.atoms.push(atom.to_string());
        self
    }

    pub fn with_subgraph(mut self, subgraph: Graph) -> Graph {
        self.subgraphs.push(subgraph);
        self
    }

    pub fn is_sheet(&self) -> bool {
        self.is_sheet
    }

    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    pub fn subgraphs(&self) -> &[Graph] {
        &self.subgraphs
    }

    pub fn num_subgraphs(&self) -> usize {
        self.subgraphs.len()
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn size(&self) -> usize {
        self.num_subgraphs() + self.num_atoms()
    }

    /// The number of atoms and subgraphs anywhere below this context.
    pub fn total_size(&self) -> usize {
        self.size() + self.subgraphs.iter().map(Graph::total_size).sum::<usize>()
    }

    /// Whether this context is a cut whose only content is another cut.
    pub fn is_double_cut(&self) -> bool {
        self.num_subgraphs() == 1 && self.num_atoms() == 0
    }

    /// The element at `index`, subgraphs first and atoms after them.
    pub fn element(&self, index: usize) -> Option<Element<'_>> {
        if index < self.num_subgraphs() {
            Some(Element::Subgraph(&self.subgraphs[index]))
        } else {
            self.atoms
                .get(index - self.num_subgraphs())
                .map(|atom| Element::Atom(atom))
        }
    }

    /// Safe indexing with an empty-cut sentinel.
    ///
    /// Subgraphs are returned as they are, an atom is returned as the cut
    /// holding just that atom, and an out of range index returns `[]`.
    pub fn get(&self, index: usize) -> Graph {
        match self.element(index) {
            Some(Element::Subgraph(subgraph)) => subgraph.clone(),
            Some(Element::Atom(atom)) => Graph::literal(atom),
            None => Graph::cut(),
        }
    }

    /// Follows `address` with [get](Graph::get), so it never fails.
    pub fn at(&self, address: &Address) -> Graph {
        address
            .indices()
            .iter()
            .fold(self.clone(), |graph, &index| graph.get(index))
    }

    /// The element at `address`, if every index along it is in range.
    pub fn lookup(&self, address: &Address) -> Option<Element<'_>> {
        let (last, parent) = address.split_last()?;

        parent
            .iter()
            .try_fold(self, |graph, &index| graph.subgraphs.get(index))?
            .element(last)
    }

    /// Sorts atoms and subgraphs at every depth.
    pub fn canonicalize(&mut self) {
        self.atoms.sort();

        for subgraph in self.subgraphs.iter_mut() {
            subgraph.canonicalize();
        }

        self.subgraphs.sort_by_cached_key(Graph::to_string);
    }

    pub fn canonical(mut self) -> Graph {
        self.canonicalize();
        self
    }

    /// The textual form this graph has once canonicalized, whatever order its
    /// elements are currently in.
    pub fn canonical_form(&self) -> String {
        let mut subgraphs: Vec<String> = self.subgraphs.iter().map(Graph::canonical_form).collect();
        subgraphs.sort();

        let mut atoms: Vec<&str> = self.atoms.iter().map(String::as_str).collect();
        atoms.sort_unstable();

        let elements: Vec<&str> = subgraphs.iter().map(String::as_str).chain(atoms).collect();
        let (open, close) = self.delimiters();

        format!("{}{}{}", open, elements.join(", "), close)
    }

    pub fn canonical_cmp(&self, other: &Graph) -> Ordering {
        self.canonical_form().cmp(&other.canonical_form())
    }

    fn delimiters(&self) -> (char, char) {
        if self.is_sheet {
            ('(', ')')
        } else {
            ('[', ']')
        }
    }

    fn write_delimited<'a, W: Write>(
        &self,
        out: &mut W,
        elements: impl Iterator<Item = &'a str>,
    ) -> fmt::Result {
        let (open, close) = self.delimiters();

        out.write_char(open)?;
        for (i, element) in elements.enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            out.write_str(element)?;
        }
        out.write_char(close)
    }

    pub fn contains_atom(&self, atom: &str) -> bool {
        self.atoms.iter().any(|a| a == atom)
            || self.subgraphs.iter().any(|subgraph| subgraph.contains_atom(atom))
    }

    pub fn contains_subgraph(&self, other: &Graph) -> bool {
        self.subgraphs.iter().any(|subgraph| subgraph == other)
            || self.subgraphs.iter().any(|subgraph| subgraph.contains_subgraph(other))
    }

    /// Addresses of every occurrence of `atom`.
    ///
    /// A context holding nothing but the atom does not report it.
    pub fn paths_to_atom(&self, atom: &str) -> Vec<Address> {
        let mut paths = Vec::new();
        self.collect_paths_to_atom(atom, &Address::root(), &mut paths);
        paths
    }

    fn collect_paths_to_atom(&self, atom: &str, prefix: &Address, paths: &mut Vec<Address>) {
        if self.size() > 1 {
            for (i, a) in self.atoms.iter().enumerate() {
                if a == atom {
                    paths.push(prefix.child(self.num_subgraphs() + i));
                }
            }
        }

        for (i, subgraph) in self.subgraphs.iter().enumerate() {
            if subgraph.contains_atom(atom) {
                subgraph.collect_paths_to_atom(atom, &prefix.child(i), paths);
            }
        }
    }

    /// Addresses of every subgraph equal to `other`.
    ///
    /// As with atoms, a match that is the only content of its context is not
    /// reported; the search carries on inside it instead.
    pub fn paths_to_subgraph(&self, other: &Graph) -> Vec<Address> {
        let mut paths = Vec::new();
        self.collect_paths_to_subgraph(other, &Address::root(), &mut paths);
        paths
    }

    fn collect_paths_to_subgraph(&self, other: &Graph, prefix: &Address, paths: &mut Vec<Address>) {
        for (i, subgraph) in self.subgraphs.iter().enumerate() {
            if self.size() > 1 && subgraph == other {
                paths.push(prefix.child(i));
            } else {
                subgraph.collect_paths_to_subgraph(other, &prefix.child(i), paths);
            }
        }
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let subgraphs: Vec<String> = self.subgraphs.iter().map(Graph::to_string).collect();

        self.write_delimited(
            f,
            subgraphs
                .iter()
                .map(String::as_str)
                .chain(self.atoms.iter().map(String::as_str)),
        )
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_form() == other.canonical_form()
    }
}

impl Eq for Graph {}

impl PartialOrd for Graph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.canonical_cmp(other))
    }
}

impl Ord for Graph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_cmp(other)
    }
}
