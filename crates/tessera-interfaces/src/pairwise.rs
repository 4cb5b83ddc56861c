//! Pairwise distance contract
//!
//! Some distance models cannot be split into "embed each side, then apply a
//! metric" (cross-attention comparators, for instance), so scoring a pair
//! directly is its own capability rather than a special case of
//! [`Extractor`](crate::Extractor).

use crate::TensorRef;
use std::sync::Arc;
use tessera_types::{Capability, Result, TesseraError};

/// A model that takes two batch-aligned inputs and returns one dissimilarity
/// per pair.
///
/// `Input` is left to the conformer: raw tensors, precomputed embeddings or
/// anything else. The only guarantee is that the output's leading dimension
/// equals the batch size of the inputs. "Distance" carries no metric-space
/// meaning.
///
/// A type implementing both this trait and [`Extractor`](crate::Extractor)
/// has two `forward` methods; call them with fully qualified syntax.
pub trait PairwiseDistanceModel: Send + Sync {
    /// What the model compares
    type Input: ?Sized;

    /// Distances between `x1[i]` and `x2[i]` for every `i` in the batch
    fn forward(&self, x1: &Self::Input, x2: &Self::Input) -> Result<TensorRef> {
        let _ = (x1, x2);
        Err(TesseraError::not_implemented::<Self>(
            Capability::PairwiseForward,
        ))
    }
}

impl<P: PairwiseDistanceModel + ?Sized> PairwiseDistanceModel for Box<P> {
    type Input = P::Input;

    fn forward(&self, x1: &Self::Input, x2: &Self::Input) -> Result<TensorRef> {
        (**self).forward(x1, x2)
    }
}

impl<P: PairwiseDistanceModel + ?Sized> PairwiseDistanceModel for Arc<P> {
    type Input = P::Input;

    fn forward(&self, x1: &Self::Input, x2: &Self::Input) -> Result<TensorRef> {
        (**self).forward(x1, x2)
    }
}
