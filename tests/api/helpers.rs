use ha_plant_helper::configuration::get_configuration;
use ha_plant_helper::startup::Application;

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_template(&self, endpoint: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/plants/{}", self.address, endpoint))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Random OS-assigned port so tests can run in parallel.
        c.application.port = 0;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}
