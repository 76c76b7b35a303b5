use super::RenderError;
use crate::domain::PlantConfig;
use askama::Template;

#[derive(Template)]
#[template(path = "is_home_dashboard_button.yaml", syntax = "ha", escape = "none")]
struct IsHomeDashboardButton<'a> {
    name: &'a str,
    display: &'a str,
    slug: &'a str,
}

#[derive(Template)]
#[template(path = "plant_dashboard_card.yaml", syntax = "ha", escape = "none")]
struct PlantDashboardCard<'a> {
    name: &'a str,
    display: &'a str,
    slug: &'a str,
}

/// Lovelace button toggling the home-stored flag.
pub fn is_home_dashboard_button(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = IsHomeDashboardButton {
        name: config.plant_name()?,
        display: config.displayed_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}

/// The per-plant overview card. The `[[[ ... ]]]` blocks are button-card
/// JavaScript and are emitted verbatim.
pub fn plant_dashboard_card(config: &PlantConfig) -> Result<String, RenderError> {
    let slug = config.slug()?;
    let template = PlantDashboardCard {
        name: config.plant_name()?,
        display: config.displayed_name()?,
        slug: &slug,
    };
    Ok(template.render()?)
}
