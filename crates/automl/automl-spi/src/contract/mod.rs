//! Contract traits for model search and selection
//!
//! - [`HyperparameterSearch`]: tune one candidate on a training split
//! - [`ModelSelector`]: compare candidates and pick a winner

mod hyperparameter_search;
mod model_selector;

pub use hyperparameter_search::HyperparameterSearch;
pub use model_selector::ModelSelector;
