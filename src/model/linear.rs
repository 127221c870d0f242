use super::types::{Classifier, Features};
use crate::{Error, Result};
use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{Linear, VarBuilder};
use std::collections::HashMap;
use std::path::Path;

pub const INPUT_DIM: usize = 1;
const LAYER_PREFIX: &str = "fc";

/// One linear unit followed by a sigmoid.
///
/// Parameters live in a safetensors file as `fc.weight` with shape `(1, 1)`
/// and `fc.bias` with shape `(1)`.
pub struct LinearClassifier {
    fc: Linear,
    device: Device,
}

impl LinearClassifier {
    pub fn from_parameters(weight: f32, bias: f32, device: &Device) -> Result<Self> {
        let weight = Tensor::new(&[[weight]], device)?;
        let bias = Tensor::new(&[bias], device)?;
        Ok(Self {
            fc: Linear::new(weight, Some(bias)),
            device: device.clone(),
        })
    }

    /// Reads parameters from `path`. Any deserialization or shape problem is
    /// reported as [`Error::ModelLoad`] carrying the underlying cause.
    pub fn load(path: &Path, device: &Device) -> Result<Self> {
        let fc = Self::read_layer(path, device).map_err(|e| Error::model_load(e.to_string()))?;
        Ok(Self {
            fc,
            device: device.clone(),
        })
    }

    fn read_layer(path: &Path, device: &Device) -> candle_core::Result<Linear> {
        let tensors = candle_core::safetensors::load(path, device)?;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, device);
        candle_nn::linear(INPUT_DIM, 1, vb.pp(LAYER_PREFIX))
    }

    /// Writes the parameters in the format [`LinearClassifier::load`] reads.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut tensors = HashMap::new();
        tensors.insert(format!("{LAYER_PREFIX}.weight"), self.fc.weight().clone());
        if let Some(bias) = self.fc.bias() {
            tensors.insert(format!("{LAYER_PREFIX}.bias"), bias.clone());
        }
        candle_core::safetensors::save(&tensors, path)?;
        Ok(())
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn confidence(&self, features: &Features) -> candle_core::Result<f32> {
        let values = features.values();
        let xs = Tensor::from_slice(values, (1, values.len()), &self.device)?;
        let logits = self.fc.forward(&xs)?;
        let probs = candle_nn::ops::sigmoid(&logits)?;
        let values = probs.flatten_all()?.to_vec1::<f32>()?;
        values
            .first()
            .copied()
            .ok_or_else(|| candle_core::Error::Msg("model produced no output".to_string()))
    }
}

impl Classifier for LinearClassifier {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn forward(&self, features: &Features) -> Result<f64> {
        if features.values().len() != INPUT_DIM {
            return Err(Error::inference(format!(
                "expected {} feature(s), got {}",
                INPUT_DIM,
                features.values().len()
            )));
        }

        let confidence = self
            .confidence(features)
            .map_err(|e| Error::inference(e.to_string()))?;
        Ok(f64::from(confidence))
    }
}
