//! The fixed set of compute engines a cluster can host.
//!
//! This enumeration is the single place that knows which trace
//! components are kept, in which order their rows are laid out and
//! how they are drawn.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compute engine inside a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// iDMA frontend (data movement)
    Idma,
    /// RedMulE matrix engine
    Redmule,
    /// Vector engine
    Vecteng,
}

impl Engine {
    /// All engines in row priority order
    pub const ALL: [Engine; 3] = [Engine::Idma, Engine::Redmule, Engine::Vecteng];

    /// Short name used in row keys and JSON
    pub fn name(self) -> &'static str {
        match self {
            Engine::Idma => "idma",
            Engine::Redmule => "redmule",
            Engine::Vecteng => "vecteng",
        }
    }

    /// Component segment of the trace path that reports this engine
    pub fn trace_component(self) -> &'static str {
        match self {
            Engine::Idma => "idma/fe",
            Engine::Redmule => "redmule",
            Engine::Vecteng => "vecteng",
        }
    }

    /// Map a trace path component to its engine slot
    ///
    /// Components outside the recognized set yield `None`.
    pub fn from_component(component: &str) -> Option<Engine> {
        Engine::ALL
            .into_iter()
            .find(|engine| engine.trace_component() == component)
    }

    /// Fill colour of this engine's interval bars
    pub fn color(self) -> &'static str {
        match self {
            Engine::Idma => "red",
            Engine::Redmule => "green",
            Engine::Vecteng => "purple",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .into_iter()
            .find(|engine| engine.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown engine: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_component() {
        assert_eq!(Engine::from_component("idma/fe"), Some(Engine::Idma));
        assert_eq!(Engine::from_component("redmule"), Some(Engine::Redmule));
        assert_eq!(Engine::from_component("vecteng"), Some(Engine::Vecteng));
        assert_eq!(Engine::from_component("idma/be"), None);
        assert_eq!(Engine::from_component("cluster_registers"), None);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("RedMulE".parse::<Engine>().unwrap(), Engine::Redmule);
        assert!("spatz".parse::<Engine>().is_err());
    }

    #[test]
    fn test_priority_order() {
        let mut sorted = Engine::ALL;
        sorted.sort();
        assert_eq!(sorted, Engine::ALL);
    }
}
