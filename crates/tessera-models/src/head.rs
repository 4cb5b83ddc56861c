//! MLP projection head

use crate::tensor_wrapper::CandleResultExt;
use candle_core::Tensor;
use candle_nn::{Linear, Module, VarBuilder};
use tessera_types::{HeadConfig, Result};

/// Stack of linear layers with ReLU between them (none after the last)
pub struct MlpHead {
    layers: Vec<Linear>,
    out_features: usize,
}

impl MlpHead {
    pub fn new(in_features: usize, config: &HeadConfig, vb: VarBuilder) -> Result<Self> {
        config.validate()?;
        let layers = config
            .layer_sizes(in_features)
            .windows(2)
            .enumerate()
            .map(|(i, dims)| {
                candle_nn::linear(dims[0], dims[1], vb.pp(format!("layer{}", i)))
                    .or_backend("head layer init")
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            layers,
            out_features: config.out_features,
        })
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        let last = self.layers.len().saturating_sub(1);
        let mut xs = xs.clone();
        for (i, layer) in self.layers.iter().enumerate() {
            xs = layer.forward(&xs).or_backend("head layer")?;
            if i < last {
                xs = xs.relu().or_backend("relu")?;
            }
        }
        Ok(xs)
    }
}
