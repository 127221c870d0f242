mod linear;
mod loader;
mod placeholder;
mod types;

pub use linear::{INPUT_DIM, LinearClassifier};
pub use loader::{load_model, select_device};
pub use placeholder::{KeywordClassifier, NEGATIVE_CONFIDENCE, POSITIVE_CONFIDENCE};
pub use types::{Classifier, Features};
