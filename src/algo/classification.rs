use std::fmt::Display;

/// Outcome of an Eulerian or Hamiltonian analysis.
///
/// The variants are ordered by strength: a graph admitting a circuit also admits a path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Classification {
    /// Neither an (open) path nor a circuit exists
    #[default]
    None,
    /// An open path exists, but no circuit
    Path,
    /// A closed circuit exists
    Circuit,
}

impl Classification {
    /// Returns *true* if at least a path exists (which includes circuits)
    pub fn has_path(&self) -> bool {
        *self != Classification::None
    }

    /// Returns *true* if a circuit exists
    pub fn has_circuit(&self) -> bool {
        *self == Classification::Circuit
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Classification::None => "none",
            Classification::Path => "path",
            Classification::Circuit => "circuit",
        };
        write!(f, "{name}")
    }
}
