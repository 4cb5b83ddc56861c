//! Reference models conforming to the Tessera capability contracts
//!
//! Small candle-backed conformers: a linear extractor, an extractor with an
//! MLP head (Extractor + Freezable) and two siamese distance models
//! (PairwiseDistanceModel, one of them also Freezable). They double as worked
//! examples of implementing the contracts against a real tensor runtime.

pub mod head;
pub mod linear;
pub mod parameters;
pub mod siamese;
pub mod tensor_wrapper;
pub mod with_head;

pub use head::MlpHead;
pub use linear::LinearExtractor;
pub use parameters::{ParameterGroup, ParameterStore};
pub use siamese::{ConcatSiamese, TrivialDistanceSiamese};
pub use tensor_wrapper::{as_candle, candle_device, CandleTensorWrapper};
pub use with_head::{ExtractorWithHead, BACKBONE_GROUP, HEAD_GROUP};

pub use tessera_interfaces::{Extractor, Freezable, PairwiseDistanceModel, TensorRef};
pub use tessera_types::{ExtractorConfig, HeadConfig, Result, SiameseConfig};
