mod automations;
mod dashboard;
mod inputs;
mod sensors;

pub use automations::{render_demanding_watering_automation, render_watering_status_automation};
pub use dashboard::{render_is_home_button, render_plant_card};
pub use inputs::{render_boolean_customization, render_boolean_input, render_datetime_input};
pub use sensors::{render_aggregating_sensor, render_temperature_sensor};

use crate::render::RenderError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

impl ResponseError for RenderError {
    fn status_code(&self) -> StatusCode {
        match self {
            RenderError::Validation(_) => StatusCode::BAD_REQUEST,
            RenderError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
