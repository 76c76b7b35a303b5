use super::RenderError;
use crate::domain::PlantConfig;
use askama::Template;

#[derive(Template)]
#[template(path = "boolean_input.yaml", syntax = "ha", escape = "none")]
struct BooleanInput<'a> {
    name: &'a str,
    slug: &'a str,
}

#[derive(Template)]
#[template(path = "boolean_customization.yaml", syntax = "ha", escape = "none")]
struct BooleanCustomization<'a> {
    name: &'a str,
    slug: &'a str,
    watering_frequency_days: i32,
    minimum_temperature: f64,
    image_url: &'a str,
}

#[derive(Template)]
#[template(path = "datetime_input.yaml", syntax = "ha", escape = "none")]
struct DatetimeInput<'a> {
    name: &'a str,
    slug: &'a str,
}

/// The three `input_boolean` entries backing a plant: the info holder plus
/// the watered and home-stored flags.
pub fn boolean_input(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = BooleanInput {
        name: config.plant_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}

/// Customization entry attaching watering frequency, minimum temperature and
/// picture to the plant's info boolean.
pub fn boolean_customization(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = BooleanCustomization {
        name: config.plant_name()?,
        slug: &slug,
        watering_frequency_days: config.watering_frequency_days()?,
        minimum_temperature: config.minimum_temperature()?,
        image_url: config.image_url()?,
    };
    Ok(template.render()?)
}

/// `input_datetime` entry recording when the plant was last watered.
pub fn datetime_input(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = DatetimeInput {
        name: config.plant_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}
