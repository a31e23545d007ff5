//! Fixed evidence weights per catalog slot

use serde::{Deserialize, Serialize};

/// Increment applied per publication occurrence when counting stored
/// discipline contributions.
pub const UNIT_INCREMENT: f64 = 0.001;

/// Weights propagated from a journal's discipline slots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisciplineWeights {
    /// Primary discipline (slot A)
    pub a: f64,
    /// Secondary discipline (slot B)
    pub b: f64,
    /// Each overflow discipline (list C)
    pub c: f64,
}

impl Default for DisciplineWeights {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.5,
            c: 0.2,
        }
    }
}

/// Weights propagated from a discipline's domain slots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainWeights {
    pub a: f64,
    pub b: f64,
}

impl Default for DomainWeights {
    fn default() -> Self {
        Self { a: 1.0, b: 0.5 }
    }
}
