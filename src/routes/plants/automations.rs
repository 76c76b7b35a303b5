use crate::domain::PlantConfig;
use crate::render;
use crate::render::RenderError;
use crate::routes::common::rendered_yaml;
use actix_web::HttpResponse;
use actix_web::web::Json;

pub async fn render_watering_status_automation(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::watering_status_change_automation(
        &config,
    )?))
}

pub async fn render_demanding_watering_automation(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::set_demanding_watering_status_automation(&config)?))
}
