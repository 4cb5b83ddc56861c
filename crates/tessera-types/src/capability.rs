//! Capability identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation a model can declare support for.
///
/// Every capability trait operation that ships a failing default is named
/// here, so a [`TesseraError::CapabilityNotImplemented`](crate::TesseraError)
/// can say exactly which override is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// General forward computation behind `Extractor::extract`
    Forward,
    /// `Extractor::feat_dim`
    FeatDim,
    /// `Freezable::freeze`
    Freeze,
    /// `Freezable::unfreeze`
    Unfreeze,
    /// `PairwiseDistanceModel::forward`
    PairwiseForward,
}

impl Capability {
    /// Name of the contract (trait) this capability belongs to
    pub fn contract(&self) -> &'static str {
        match self {
            Capability::Forward | Capability::FeatDim => "Extractor",
            Capability::Freeze | Capability::Unfreeze => "Freezable",
            Capability::PairwiseForward => "PairwiseDistanceModel",
        }
    }

    /// Operation name as it appears on the trait
    pub fn operation(&self) -> &'static str {
        match self {
            Capability::Forward => "forward",
            Capability::FeatDim => "feat_dim",
            Capability::Freeze => "freeze",
            Capability::Unfreeze => "unfreeze",
            Capability::PairwiseForward => "forward",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.contract(), self.operation())
    }
}
