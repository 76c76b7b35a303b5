//! Turns a [`PlantConfig`](crate::domain::PlantConfig) into one of the fixed
//! Home Assistant YAML snippets.
//!
//! Every generator is a pure function over the config; the literal template
//! text lives under `templates/` and is compiled in. The snippets embed Home
//! Assistant's own Jinja and button-card JavaScript as opaque passthrough
//! text, which is why the templates use the alternate `ha` delimiter syntax
//! declared in `askama.toml`.

mod automations;
mod dashboard;
mod inputs;
mod sensors;

pub use automations::{
    set_demanding_watering_status_automation, watering_status_change_automation,
};
pub use dashboard::{is_home_dashboard_button, plant_dashboard_card};
pub use inputs::{boolean_customization, boolean_input, datetime_input};
pub use sensors::{aggregating_sensor, temperature_sensor};

use crate::domain::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
}
