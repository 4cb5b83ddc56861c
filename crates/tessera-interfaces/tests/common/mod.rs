//! Backend-free tensors and conformers for exercising the contracts

#![allow(dead_code)]

use std::{any::Any, collections::BTreeMap, sync::Arc};
use tessera_interfaces::{
    DataType, Device, Extractor, Freezable, PairwiseDistanceModel, Result, TensorLike,
    TensorRef, TesseraError,
};

/// Tensor carrying only a shape
#[derive(Debug, Clone)]
pub struct ShapeTensor {
    shape: Vec<usize>,
}

impl ShapeTensor {
    pub fn new(shape: &[usize]) -> TensorRef {
        Arc::new(Self {
            shape: shape.to_vec(),
        })
    }
}

impl TensorLike for ShapeTensor {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn dtype(&self) -> DataType {
        DataType::FP32
    }

    fn device(&self) -> Device {
        Device::CPU
    }

    fn is_contiguous(&self) -> bool {
        true
    }

    fn reshape(&self, shape: &[usize]) -> Result<TensorRef> {
        if shape.iter().product::<usize>() != self.numel() {
            return Err(TesseraError::shape_mismatch("element count changes"));
        }
        Ok(ShapeTensor::new(shape))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Extractor + Freezable with a backbone/head split
#[derive(Debug)]
pub struct ToyExtractor {
    feat_dim: usize,
    trainable: BTreeMap<&'static str, bool>,
}

impl ToyExtractor {
    pub fn new(feat_dim: usize) -> Self {
        let trainable = [("backbone", true), ("head", true)].into_iter().collect();
        Self {
            feat_dim,
            trainable,
        }
    }

    /// Names of currently trainable parameter groups
    pub fn trainable_groups(&self) -> Vec<&'static str> {
        self.trainable
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Extractor for ToyExtractor {
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        Ok(ShapeTensor::new(&[x.batch_size()?, self.feat_dim]))
    }

    fn feat_dim(&self) -> Result<usize> {
        Ok(self.feat_dim)
    }
}

impl Freezable for ToyExtractor {
    fn freeze(&mut self) -> Result<()> {
        self.trainable.insert("backbone", false);
        Ok(())
    }

    fn unfreeze(&mut self) -> Result<()> {
        self.trainable.insert("backbone", true);
        Ok(())
    }
}

/// Claims both capabilities but overrides nothing
#[derive(Debug, Default)]
pub struct Unfinished;

impl Extractor for Unfinished {}
impl Freezable for Unfinished {}

/// Claims the pairwise capability but overrides nothing
#[derive(Debug, Default)]
pub struct UnfinishedDistance;

impl PairwiseDistanceModel for UnfinishedDistance {
    type Input = TensorRef;
}

/// Pairwise model over raw tensors, one score per row
#[derive(Debug, Default)]
pub struct RowDistance;

impl PairwiseDistanceModel for RowDistance {
    type Input = TensorRef;

    fn forward(&self, x1: &TensorRef, _x2: &TensorRef) -> Result<TensorRef> {
        Ok(ShapeTensor::new(&[x1.batch_size()?]))
    }
}
