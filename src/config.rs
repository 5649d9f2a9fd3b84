use rocket::serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_shutdown_delay_ms")]
    pub shutdown_delay_ms: u64,
}

const fn default_shutdown_delay_ms() -> u64 {
    300
}

pub fn load_rocket_config() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::config::<Config>()
}
