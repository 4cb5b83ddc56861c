//! Thread-shareable model handle
//!
//! `freeze`/`unfreeze` mutate a model, so mixing them with `extract` across
//! threads needs serialization. [`SharedModel`] provides it with a
//! readers-writer lock: inference takes the read side, freezing the write
//! side.

use crate::{Extractor, Freezable, PairwiseDistanceModel, TensorRef};
use parking_lot::RwLock;
use std::sync::Arc;
use tessera_types::Result;
use tracing::debug;

/// Cloneable handle serializing access to one model instance
#[derive(Debug)]
pub struct SharedModel<M> {
    inner: Arc<RwLock<M>>,
}

impl<M> Clone for SharedModel<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> SharedModel<M> {
    pub fn new(model: M) -> Self {
        Self {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    /// Run `f` with shared access to the model
    pub fn with<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the model
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Recover the model if this is the last handle
    pub fn try_into_inner(self) -> std::result::Result<M, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<M: Freezable> SharedModel<M> {
    /// Freeze under the write lock
    pub fn freeze(&self) -> Result<()> {
        debug!("Freezing shared model");
        self.inner.write().freeze()
    }

    /// Unfreeze under the write lock
    pub fn unfreeze(&self) -> Result<()> {
        debug!("Unfreezing shared model");
        self.inner.write().unfreeze()
    }
}

impl<M: Extractor> Extractor for SharedModel<M> {
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        Extractor::forward(&*self.inner.read(), x)
    }

    fn extract(&self, x: &TensorRef) -> Result<TensorRef> {
        self.inner.read().extract(x)
    }

    fn feat_dim(&self) -> Result<usize> {
        self.inner.read().feat_dim()
    }
}

impl<M: PairwiseDistanceModel> PairwiseDistanceModel for SharedModel<M> {
    type Input = M::Input;

    fn forward(&self, x1: &Self::Input, x2: &Self::Input) -> Result<TensorRef> {
        PairwiseDistanceModel::forward(&*self.inner.read(), x1, x2)
    }
}
