use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle for a celestial body.
///
/// The rendering boundary uses it to find the mesh whose pose it should
/// replace; the simulation never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub Uuid);

impl BodyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines and debug dumps.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for BodyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short())
    }
}
