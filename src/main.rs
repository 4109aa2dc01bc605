extern crate actix_web as aw;

use ::aw::{web::Data, HttpServer};
use ::dotenvy::dotenv;
use ::env_logger::Env;
use ::log::{info, trace};

pub mod data;
pub mod handlers;
pub mod settings;
pub mod state;
use settings::{Settings, SettingsError};
use state::*;

/// request line, status and elapsed time
pub const ACCESS_LOG_FORMAT: &str = "%r %s %D ms";

macro_rules! app {
    ($static_dir:expr) => {
        ::actix_web::App::new()
            .wrap(::actix_web::middleware::Logger::new(ACCESS_LOG_FORMAT))
            .service(actix_files::Files::new("/static", $static_dir).use_last_modified(true))
            .configure(handlers::config)
            .default_service(::actix_web::web::to(handlers::not_found))
    };
}

#[derive(Debug, ::thiserror::Error)]
enum StartUpError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("general IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartUpError> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    trace!("TRACE level enabled");

    let settings = Settings::from_env()?;
    let registry = Data::new(Registry::seeded());
    let static_dir = settings.static_dir.clone();

    let srv = HttpServer::new(move || {
        app!(static_dir.as_str()).app_data(Data::clone(&registry))
    })
    .workers(settings.workers)
    .bind((settings.host.as_str(), settings.port))?
    .run();

    info!("listening on {}:{}", &settings.host, settings.port);

    srv.await?;

    Ok(())
}
