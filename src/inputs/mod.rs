//! Growth assumptions: the input record, derived-field resolution, and
//! scenario loading

mod data;
mod resolver;
pub mod loader;

pub use data::{GrowthInputs, InputError};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
pub use resolver::{apply_edit, InputField};
