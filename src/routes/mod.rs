mod common;
mod health_check;
mod plants;

pub use health_check::health_check;
pub use plants::{
    render_aggregating_sensor, render_boolean_customization, render_boolean_input,
    render_datetime_input, render_demanding_watering_automation, render_is_home_button,
    render_plant_card, render_temperature_sensor, render_watering_status_automation,
};
