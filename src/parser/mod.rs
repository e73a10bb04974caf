use crate::err::ParseError;
use crate::graph::Graph;
use crate::logging::targets;
use pest::error::{Error, ErrorVariant};
use pest::{iterators::Pair, Parser};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct GraphParser;

fn read_atom(pair: Pair<Rule>) -> Result<String, ParseError> {
    // The grammar only skips ASCII whitespace, so an atom can still trim to nothing.
    match pair.as_str().trim() {
        "" => Err(Error::new_from_span(
            ErrorVariant::CustomError {
                message: String::from("atoms cannot be blank"),
            },
            pair.as_span(),
        )
        .into()),
        atom => Ok(atom.to_string()),
    }
}

fn read_graph(pair: Pair<Rule>) -> Result<Graph, ParseError> {
    let mut graph = if pair.as_rule() == Rule::sheet {
        Graph::sheet()
    } else {
        Graph::cut()
    };

    for element in pair.into_inner() {
        match element.as_rule() {
            Rule::cut => graph.subgraphs.push(read_graph(element)?),
            Rule::atom => graph.atoms.push(read_atom(element)?),
            _ => {}
        }
    }

    Ok(graph)
}

fn check_delimiters(text: &str) -> Result<(), ParseError> {
    let open = text.chars().next();
    let close = text.chars().last();

    match (open, close) {
        (Some('('), Some(')')) | (Some('['), Some(']')) if text.len() > 1 => Ok(()),
        _ => Err(ParseError::Delimiters { open, close }),
    }
}

/// Reads a graph from bracket notation and canonicalizes it.
///
/// The outermost pair of delimiters may be `()`, giving the sheet of assertion,
/// or `[]`, giving a lone cut. Every nested context must be a cut.
pub fn parse(text: &str) -> Result<Graph, ParseError> {
    let text = text.trim();
    check_delimiters(text)?;

    // A successful parse always holds a sheet or a cut at the root.
    let root = GraphParser::parse(Rule::graph, text)?
        .find(|pair| matches!(pair.as_rule(), Rule::sheet | Rule::cut))
        .ok_or(ParseError::Delimiters {
            open: text.chars().next(),
            close: text.chars().last(),
        })?;

    let mut graph = read_graph(root)?;

    graph.canonicalize();

    log::trace!(target: targets::PARSER, "Parsed {}", graph);

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_display_snapshot;
    use quickcheck_macros::quickcheck;

    #[test]
    fn parses_a_sheet_with_a_cut() {
        let graph = parse("(a, [b, c])").unwrap();

        assert!(graph.is_sheet());
        assert_eq!(graph.atoms(), &[String::from("a")]);
        assert_eq!(graph.subgraphs(), &[parse("[b, c]").unwrap()]);
        assert!(!graph.subgraphs()[0].is_sheet());
    }

    #[test]
    fn sorts_elements_at_every_depth() {
        let graph = parse("(z, [[d, c], b, [a]], y)").unwrap();

        assert_display_snapshot!(graph, @"([[a], [c, d], b], y, z)");
    }

    #[test]
    fn commas_inside_cuts_do_not_split_the_parent() {
        let graph = parse("([a, [b, c]], d)").unwrap();

        assert_eq!(graph.num_subgraphs(), 1);
        assert_eq!(graph.num_atoms(), 1);
        assert_eq!(graph.subgraphs()[0].num_atoms(), 1);
    }

    #[test]
    fn trims_whitespace_around_elements() {
        let graph = parse("  (  a ,\n[ b  c ,d ] )\n").unwrap();

        assert_display_snapshot!(graph, @"([b  c, d], a)");
    }

    #[test]
    fn parses_empty_contexts() {
        assert_eq!(parse("()").unwrap().size(), 0);
        assert_display_snapshot!(parse("([], [[]])").unwrap(), @"([[]], [])");
    }

    #[test]
    fn parses_a_lone_cut() {
        let graph = parse("[b, a]").unwrap();

        assert!(!graph.is_sheet());
        assert_display_snapshot!(graph, @"[a, b]");
    }

    #[test]
    fn keeps_duplicate_atoms() {
        assert_display_snapshot!(parse("(a, b, a)").unwrap(), @"(a, a, b)");
    }

    #[test]
    fn rejects_mismatched_outer_delimiters() {
        assert_eq!(
            parse("(a, b]"),
            Err(ParseError::Delimiters {
                open: Some('('),
                close: Some(']')
            })
        );
        assert_eq!(
            parse("a, b"),
            Err(ParseError::Delimiters {
                open: Some('a'),
                close: Some('b')
            })
        );
        assert_eq!(
            parse(""),
            Err(ParseError::Delimiters {
                open: None,
                close: None
            })
        );
        assert_eq!(
            parse("("),
            Err(ParseError::Delimiters {
                open: Some('('),
                close: Some('(')
            })
        );
    }

    #[test]
    fn rejects_nested_sheets() {
        assert!(matches!(parse("(a, (b))"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn rejects_empty_elements() {
        assert!(matches!(parse("(a, )"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("[, a]"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn rejects_atoms_made_only_of_whitespace() {
        assert!(matches!(parse("(\u{a0}, a)"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("([\u{b}], b)"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("(a, [\u{c}])"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn trims_unicode_whitespace_around_atoms() {
        let graph = parse("(\u{a0}a\u{a0}, [b\u{c}])").unwrap();

        assert_eq!(graph.to_string(), "([b], a)");
        assert_eq!(parse(&graph.to_string()).unwrap(), graph);
    }

    #[test]
    fn rejects_unbalanced_cuts() {
        assert!(matches!(parse("([a, b)"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("(a], [b)"), Err(ParseError::Syntax(_))));
    }

    #[quickcheck]
    fn reparsing_rendered_graphs_is_lossless(graph: crate::graph::Graph) {
        let text = graph.to_string();
        let reparsed = parse(&text).unwrap();

        assert_eq!(reparsed, graph);
        assert_eq!(reparsed.to_string(), text);
    }
}
