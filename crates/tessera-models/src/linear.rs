//! Single linear projection extractor

use crate::tensor_wrapper::{as_candle, candle_device, CandleResultExt, CandleTensorWrapper};
use candle_core::{DType, Var};
use candle_nn::{Linear, Module, VarBuilder, VarMap};
use tessera_interfaces::{tensor::utils::flattened_width, Extractor, TensorRef};
use tessera_types::{ExtractorConfig, Result, TesseraError};
use tracing::debug;

/// Flattens `[batch, ...]` to `[batch, in_features]` and projects to `feat_dim`
pub struct LinearExtractor {
    config: ExtractorConfig,
    linear: Linear,
    varmap: VarMap,
    device: candle_core::Device,
}

impl LinearExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let device = candle_device(&config.device)?;
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let linear = candle_nn::linear(config.in_features, config.feat_dim, vb.pp("proj"))
            .or_backend("projection init")?;

        debug!(
            "Created LinearExtractor: in_features={}, feat_dim={}, device={}",
            config.in_features, config.feat_dim, config.device
        );

        Ok(Self {
            config,
            linear,
            varmap,
            device,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn device(&self) -> &candle_core::Device {
        &self.device
    }

    /// Every trainable variable of the projection
    pub fn vars(&self) -> Vec<Var> {
        self.varmap.all_vars()
    }
}

impl Extractor for LinearExtractor {
    fn forward(&self, x: &TensorRef) -> Result<TensorRef> {
        let batch = x.batch_size()?;
        let width = flattened_width(x.shape())?;
        if width != self.config.in_features {
            return Err(TesseraError::shape_mismatch(format!(
                "LinearExtractor expects {} features per sample, got {} from shape {:?}",
                self.config.in_features,
                width,
                x.shape()
            )));
        }

        let xs = as_candle(x, &self.device)?
            .reshape((batch, width))
            .or_backend("flatten")?;
        let out = self.linear.forward(&xs).or_backend("projection")?;

        debug!("LinearExtractor forward: batch={}", batch);
        Ok(CandleTensorWrapper::into_ref(out))
    }

    fn feat_dim(&self) -> Result<usize> {
        Ok(self.config.feat_dim)
    }
}
