use super::RenderError;
use crate::domain::PlantConfig;
use askama::Template;

#[derive(Template)]
#[template(path = "temperature_sensor.yaml", syntax = "ha", escape = "none")]
struct TemperatureSensor<'a> {
    name: &'a str,
    slug: &'a str,
}

#[derive(Template)]
#[template(path = "aggregating_sensor.yaml", syntax = "ha", escape = "none")]
struct AggregatingSensor<'a> {
    name: &'a str,
    slug: &'a str,
}

/// Template binary sensor that compares the outdoor temperature against the
/// plant's minimum, while the plant is stored outside. The `{{ ... }}` state
/// lookups are Home Assistant Jinja and are emitted verbatim.
pub fn temperature_sensor(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = TemperatureSensor {
        name: config.plant_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}

/// Template binary sensor combining the watering flag and the temperature
/// sensor into a single needs-attention state.
pub fn aggregating_sensor(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = AggregatingSensor {
        name: config.plant_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}
