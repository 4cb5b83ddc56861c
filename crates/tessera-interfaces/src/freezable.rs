//! Partial, reversible suspension of trainability

use tessera_types::{Capability, Result, TesseraError};

/// A model that can freeze and unfreeze parts of itself.
///
/// Which parameters are affected is up to the conformer (commonly everything
/// but a final projection); there is no default policy. Both operations must
/// be idempotent and must not change `feat_dim` or any output shape.
///
/// Freeze state is intentionally not queryable through this trait.
pub trait Freezable: Send + Sync {
    /// Suspend trainability of the conformer's chosen parameter subset
    fn freeze(&mut self) -> Result<()> {
        Err(TesseraError::not_implemented::<Self>(Capability::Freeze))
    }

    /// Restore trainability of everything `freeze` suspended
    fn unfreeze(&mut self) -> Result<()> {
        Err(TesseraError::not_implemented::<Self>(Capability::Unfreeze))
    }
}

impl<F: Freezable + ?Sized> Freezable for Box<F> {
    fn freeze(&mut self) -> Result<()> {
        (**self).freeze()
    }

    fn unfreeze(&mut self) -> Result<()> {
        (**self).unfreeze()
    }
}
