use std::sync::Arc;

use structopt::StructOpt;

pub mod fetcher;
pub mod lister;
pub mod models;
pub mod telemetry;
pub mod web;

pub use fetcher::{fetch_data, fetch_photos, photo_obj_to_url, transform_photo_obj, Fetch};
pub use lister::{add_photos_to_element, photo_list_to_html, photo_to_list_item};
pub use models::photos::DisplayRecord;

/// Shared server state, generic over where the photos come from.
#[derive(Clone)]
pub struct State<F = fetcher::SurfFetcher> {
    pub args: Arc<Args>,
    pub tera: Arc<tera::Tera>,
    pub fetcher: F,
}

#[derive(Debug)]
pub enum Error {
    TemplatePathError(std::io::Error),
    TemplateParseError(tera::Error),
    TelemetryInitError(anyhow::Error),
    ServerError(std::io::Error),
}

impl From<Error> for u8 {
    fn from(error: Error) -> u8 {
        match error {
            Error::TemplatePathError(_) => 2,
            Error::TemplateParseError(_) => 3,
            Error::TelemetryInitError(_) => 4,
            Error::ServerError(_) => 5,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TemplatePathError(err) => {
                write!(f, "Invalid template path: {}", err)
            },
            Error::TemplateParseError(err) => {
                write!(f, "Template parsing error: {}", err)
            },
            Error::TelemetryInitError(err) => {
                write!(f, "Failed to init telemetry: {}", err)
            },
            Error::ServerError(err) => {
                write!(f, "Server error: {}", err)
            },
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Args {
    /// Host address to bind to.
    #[structopt(long, default_value = "localhost", env = "RUSTY_PUGS_BIND_ADDRESS")]
    address: String,
    /// Port to bind to.
    #[structopt(long, default_value = "8166", env = "RUSTY_PUGS_BIND_PORT")]
    port: u16,

    /// Flickr API key used for the photo search.
    #[structopt(long, env = "FLICKR_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Path to Tera templates directory
    #[structopt(
        long,
        parse(from_os_str),
        default_value = "./templates",
        env = "RUSTY_PUGS_TEMPLATE_PATH"
    )]
    template_path: std::path::PathBuf,

    /// CSS selector of the gallery page element the photo list goes into.
    #[structopt(long, default_value = "#app", env = "RUSTY_PUGS_SELECTOR")]
    selector: String,
}

pub async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::from_args());

    telemetry::init().map_err(Error::TelemetryInitError)?;

    let template_path = args
        .template_path
        .canonicalize()
        .map_err(Error::TemplatePathError)?;
    let tera = match tera::Tera::new(&template_path.join("**/*.html").to_string_lossy()) {
        Ok(t) => t,
        Err(e) => {
            return Err(Error::TemplateParseError(e));
        },
    };

    let state = State {
        args: args.clone(),
        tera: Arc::new(tera),
        fetcher: fetcher::SurfFetcher::new(),
    };
    let mut app = tide::with_state(state);

    web::mount(&mut app);

    let address: &str = args.address.as_ref();
    tracing::info!(address, port = args.port, "starting gallery server");
    app.listen((address, args.port))
        .await
        .map_err(Error::ServerError)?;

    Ok(())
}
