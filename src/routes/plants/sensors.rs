use crate::domain::PlantConfig;
use crate::render;
use crate::render::RenderError;
use crate::routes::common::rendered_yaml;
use actix_web::HttpResponse;
use actix_web::web::Json;

pub async fn render_temperature_sensor(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::temperature_sensor(&config)?))
}

pub async fn render_aggregating_sensor(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::aggregating_sensor(&config)?))
}
