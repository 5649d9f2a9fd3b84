use std::sync::Arc;

#[macro_use]
extern crate rocket;

mod config;
mod exit;
mod terminate;

use terminate::{SystemTerminator, Terminator};

#[get("/")]
fn index() -> &'static str {
    "This is the exit-button module"
}

pub fn main_rocket() -> rocket::Rocket<rocket::Build> {
    rocket_with_terminator(Arc::new(SystemTerminator))
}

pub fn rocket_with_terminator(
    terminator: Arc<dyn Terminator>,
) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .attach(config::load_rocket_config())
        .manage(terminator)
        .mount("/", routes![index, exit::exit])
}

#[launch]
fn rocket() -> _ {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    main_rocket()
}
