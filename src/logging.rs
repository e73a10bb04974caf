/*!
Items related to [logging](log).

No log implementation is installed by the library; the cli binary uses `env_logger`,
so output can be narrowed with e.g. `RUST_LOG=inference=debug`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [path, parity and cut mark assignment](crate::graph::annotation)
    pub const ANNOTATION: &str = "annotation";

    /// Logs related to [candidate enumeration and rule application](crate::inference)
    pub const INFERENCE: &str = "inference";

    /// Logs related to [random graphs](crate::generation)
    pub const GENERATION: &str = "generation";
}
