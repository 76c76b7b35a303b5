use dotenv::dotenv;
use env_logger::Env;
use ha_plant_helper::configuration::get_configuration;
use ha_plant_helper::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    log::info!("listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
