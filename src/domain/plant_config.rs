use super::ValidationError;
use serde::Deserialize;

/// Everything the generator endpoints know about a single plant.
///
/// All fields are optional on the wire; each endpoint checks for the fields
/// it actually needs, so a missing value is reported against its field name
/// instead of being bounced by the deserializer.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantConfig {
    /// The unique name of the plant (used in entity ids and YAML keys).
    pub plant_name: Option<String>,

    /// Human-facing label for dashboard cards. Falls back to `plant_name`.
    pub displayed_name: Option<String>,

    /// The frequency, in days, at which the plant should be watered.
    pub watering_frequency_days: Option<i32>,

    /// The minimum temperature (in degrees Celsius) the plant can tolerate.
    pub minimum_temperature: Option<f64>,

    /// URL to the plant's image (used in dashboard cards).
    pub image_url: Option<String>,
}

impl PlantConfig {
    pub fn plant_name(&self) -> Result<&str, ValidationError> {
        require_text(&self.plant_name, "plantName")
    }

    /// Machine identifier embedded into entity ids and YAML keys.
    ///
    /// ASCII-only case fold: the generated ids must come out the same no
    /// matter which locale the server happens to run under.
    pub fn slug(&self) -> Result<String, ValidationError> {
        Ok(self.plant_name()?.to_ascii_lowercase())
    }

    pub fn displayed_name(&self) -> Result<&str, ValidationError> {
        match &self.displayed_name {
            Some(_) => require_text(&self.displayed_name, "displayedName"),
            None => self.plant_name(),
        }
    }

    pub fn watering_frequency_days(&self) -> Result<i32, ValidationError> {
        match self.watering_frequency_days {
            Some(days) if days > 0 => Ok(days),
            Some(days) => Err(ValidationError::NonPositiveWateringFrequency(days)),
            None => Err(ValidationError::MissingField("wateringFrequencyDays")),
        }
    }

    pub fn minimum_temperature(&self) -> Result<f64, ValidationError> {
        self.minimum_temperature
            .ok_or(ValidationError::MissingField("minimumTemperature"))
    }

    pub fn image_url(&self) -> Result<&str, ValidationError> {
        require_text(&self.image_url, "imageUrl")
    }
}

fn require_text<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(text) if text.trim().is_empty() => Err(ValidationError::EmptyField(field)),
        Some(text) => Ok(text),
    }
}
