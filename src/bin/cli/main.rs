mod generate;
mod inspect;
mod rules;

use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use existential_graphs::{parse, Address, Graph, Inference};
use std::error::Error;
use std::io::{self, Read};

fn graph_arg() -> Arg<'static, 'static> {
    Arg::with_name("graph")
        .help("The graph in bracket notation, e.g. \"(a, [b, c])\", or - to read it from stdin")
        .required(true)
}

fn rule_arg(names: &[&'static str]) -> Arg<'static, 'static> {
    Arg::with_name("rule")
        .help("The rule to use")
        .required(true)
        .possible_values(names)
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Box<dyn Error>> {
    matches
        .value_of(name)
        .ok_or_else(|| format!("missing argument <{}>", name).into())
}

fn read_graph(matches: &ArgMatches) -> Result<Graph, Box<dyn Error>> {
    let text = match value(matches, "graph")? {
        "-" => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
        text => String::from(text),
    };

    Ok(parse(&text)?)
}

fn read_rule(matches: &ArgMatches) -> Result<Inference, Box<dyn Error>> {
    Ok(value(matches, "rule")?.parse()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let rule_names: Vec<&'static str> = Inference::all().iter().map(|inference| inference.name()).collect();

    let matches = App::new("Existential Graphs")
        .about("Parse and transform Peirce's alpha existential graphs")
        .subcommand(
            SubCommand::with_name("show")
                .about("Print the canonical form and size of a graph")
                .arg(graph_arg().index(1)),
        )
        .subcommand(
            SubCommand::with_name("paths")
                .about("Print the address of every occurrence of an atom or subgraph")
                .arg(graph_arg().index(1))
                .arg(
                    Arg::with_name("atom")
                        .help("The atom to look for")
                        .long("atom")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("subgraph")
                        .help("The cut to look for, e.g. \"[a, b]\"")
                        .long("subgraph")
                        .takes_value(true),
                )
                .group(
                    ArgGroup::with_name("target")
                        .args(&["atom", "subgraph"])
                        .required(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("candidates")
                .about("Print every address a rule can be applied at")
                .arg(rule_arg(&rule_names).index(1))
                .arg(graph_arg().index(2)),
        )
        .subcommand(
            SubCommand::with_name("apply")
                .about("Apply a rule at an address and print the resulting graph")
                .arg(rule_arg(&rule_names).index(1))
                .arg(graph_arg().index(2))
                .arg(
                    Arg::with_name("at")
                        .help("The address to apply the rule at, e.g. \"0 1\"")
                        .long("at")
                        .required(true)
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Print randomly generated graphs")
                .arg(
                    Arg::with_name("seed")
                        .help("The seed for the random number generator")
                        .long("seed")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("The maximum number of nested cuts")
                        .long("depth")
                        .default_value("3")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("count")
                        .help("The number of graphs to generate")
                        .short("n")
                        .long("count")
                        .default_value("1")
                        .takes_value(true),
                ),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    match matches.subcommand() {
        ("show", Some(matches)) => {
            print!("{}", inspect::show(&read_graph(matches)?));
        }
        ("paths", Some(matches)) => {
            let graph = read_graph(matches)?;
            let paths = match matches.value_of("atom") {
                Some(atom) => graph.paths_to_atom(atom),
                None => graph.paths_to_subgraph(&parse(value(matches, "subgraph")?)?),
            };

            print!("{}", inspect::addresses(&paths));
        }
        ("candidates", Some(matches)) => {
            let graph = read_graph(matches)?;
            let inference = read_rule(matches)?;

            print!("{}", rules::candidates(inference, &graph));
        }
        ("apply", Some(matches)) => {
            let graph = read_graph(matches)?;
            let inference = read_rule(matches)?;
            let address: Address = value(matches, "at")?.parse()?;

            println!("{}", rules::apply(inference, &graph, &address)?);
        }
        ("generate", Some(matches)) => {
            let seed: Option<u64> = matches.value_of("seed").map(str::parse).transpose()?;
            let depth: usize = value(matches, "depth")?.parse()?;
            let count: usize = value(matches, "count")?.parse()?;

            print!("{}", generate::run(seed, depth, count));
        }
        _ => {}
    }

    Ok(())
}
