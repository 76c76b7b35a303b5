use crate::domain::PlantConfig;
use crate::render;
use crate::render::RenderError;
use crate::routes::common::rendered_yaml;
use actix_web::HttpResponse;
use actix_web::web::Json;

pub async fn render_boolean_input(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::boolean_input(&config)?))
}

pub async fn render_boolean_customization(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::boolean_customization(&config)?))
}

pub async fn render_datetime_input(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::datetime_input(&config)?))
}
