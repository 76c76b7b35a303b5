use super::RenderError;
use crate::domain::PlantConfig;
use askama::Template;

#[derive(Template)]
#[template(
    path = "watering_status_change_automation.yaml",
    syntax = "ha",
    escape = "none"
)]
struct WateringStatusChangeAutomation<'a> {
    name: &'a str,
    slug: &'a str,
}

#[derive(Template)]
#[template(
    path = "set_demanding_watering_status_automation.yaml",
    syntax = "ha",
    escape = "none"
)]
struct SetDemandingWateringStatusAutomation<'a> {
    name: &'a str,
    slug: &'a str,
}

/// Automation stamping the last-watered datetime whenever the watered flag
/// is switched on.
pub fn watering_status_change_automation(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = WateringStatusChangeAutomation {
        name: config.plant_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}

/// Automation clearing the watered flag once the configured watering
/// interval has elapsed since the last watering.
pub fn set_demanding_watering_status_automation(
    config: &PlantConfig,
) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = SetDemandingWateringStatusAutomation {
        name: config.plant_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}
