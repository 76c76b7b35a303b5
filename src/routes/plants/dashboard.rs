use crate::domain::PlantConfig;
use crate::render;
use crate::render::RenderError;
use crate::routes::common::rendered_yaml;
use actix_web::HttpResponse;
use actix_web::web::Json;

pub async fn render_is_home_button(
    config: Json<PlantConfig>,
) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::is_home_dashboard_button(&config)?))
}

pub async fn render_plant_card(config: Json<PlantConfig>) -> Result<HttpResponse, RenderError> {
    Ok(rendered_yaml(render::plant_dashboard_card(&config)?))
}
