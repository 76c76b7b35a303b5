use crate::configuration::Settings;
use crate::routes::{
    health_check, render_aggregating_sensor, render_boolean_customization, render_boolean_input,
    render_datetime_input, render_demanding_watering_automation, render_is_home_button,
    render_plant_card, render_temperature_sensor, render_watering_status_automation,
};
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(listener: TcpListener) -> Result<Server, anyhow::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api/plants")
                    .route("/booleanInputTemplate", web::post().to(render_boolean_input))
                    .route(
                        "/booleanCustomization",
                        web::post().to(render_boolean_customization),
                    )
                    .route("/datetimeInput", web::post().to(render_datetime_input))
                    .route(
                        "/temperatureSensor",
                        web::post().to(render_temperature_sensor),
                    )
                    .route(
                        "/aggregatingSensor",
                        web::post().to(render_aggregating_sensor),
                    )
                    .route(
                        "/wateringStatusChangeAutomation",
                        web::post().to(render_watering_status_automation),
                    )
                    .route(
                        "/isHomeDashboardButton",
                        web::post().to(render_is_home_button),
                    )
                    .route("/plantDashboardCard", web::post().to(render_plant_card))
                    .route(
                        "/setDemandingWateringStatusAutomation",
                        web::post().to(render_demanding_watering_automation),
                    ),
            )
    })
    .listen(listener)?
    .run();
    Ok(server)
}
