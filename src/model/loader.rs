use super::{Classifier, KeywordClassifier, LinearClassifier};
use crate::{config::RunMode, Error, Result};
use candle_core::Device;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Picks the compute device: an explicit request wins, then the first CUDA
/// device, then CPU.
pub fn select_device(requested: Option<Device>) -> Device {
    if let Some(device) = requested {
        return device;
    }

    match Device::cuda_if_available(0) {
        Ok(device) => device,
        Err(e) => {
            warn!("CUDA probe failed, falling back to CPU: {}", e);
            Device::Cpu
        }
    }
}

/// Resolves the model the service runs with.
///
/// Outside production this is always the keyword placeholder and nothing is
/// read from disk. In production the parameters at `path` are loaded into a
/// [`LinearClassifier`].
pub fn load_model(
    path: impl AsRef<Path>,
    device: Option<Device>,
    mode: RunMode,
) -> Result<Arc<dyn Classifier>> {
    if !mode.is_production() {
        info!("Running in {} mode, using placeholder model", mode);
        return Ok(Arc::new(KeywordClassifier::new()));
    }

    let path = path.as_ref();
    let device = select_device(device);

    if !path.exists() {
        return Err(Error::ModelNotFound {
            path: path.display().to_string(),
        });
    }

    debug!("Loading model parameters from: {}", path.display());
    let model = LinearClassifier::load(path, &device)?;

    info!(
        "Loaded {} model from {} on {:?}",
        model.name(),
        path.display(),
        model.device()
    );

    Ok(Arc::new(model))
}
