use existential_graphs::generation::generate_graph;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn run(seed: Option<u64>, max_depth: usize, count: usize) -> String {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    (0..count)
        .map(|_| format!("{}\n", generate_graph(&mut rng, max_depth)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use existential_graphs::parse;

    #[test]
    fn generate_test() {
        let output = run(Some(7), 2, 5);

        assert_eq!(output, run(Some(7), 2, 5));
        assert_eq!(output.lines().count(), 5);

        for line in output.lines() {
            assert_eq!(parse(line).unwrap().to_string(), line);
        }
    }
}
