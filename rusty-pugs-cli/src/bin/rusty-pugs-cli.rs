use std::io::Write;

use structopt::StructOpt;

use rusty_pugs::fetcher::{fetch_photos, SurfFetcher};
use rusty_pugs::lister::photo_list_to_html;
use rusty_pugs::DisplayRecord;
use rusty_pugs_cli::render::render_into_file;

#[derive(StructOpt)]
pub struct SharedApiArgs {
    /// Flickr API key
    #[structopt(long, env = "FLICKR_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[derive(StructOpt)]
pub struct RenderArgs {
    #[structopt(flatten)]
    api_arguments: SharedApiArgs,

    /// CSS selector of the element to put the photo list into.
    #[structopt(long, default_value = "#app")]
    selector: String,

    /// Where to write the resulting document. Defaults to stdout.
    #[structopt(long, parse(from_os_str))]
    output: Option<std::path::PathBuf>,

    /// Path to the HTML document to render into.
    #[structopt(name = "INPUT", parse(from_os_str))]
    input: std::path::PathBuf,
}

#[derive(StructOpt)]
pub enum Command {
    /// Print the photo search results as JSON.
    Fetch(SharedApiArgs),
    /// Print the photo search results as an HTML list.
    List(SharedApiArgs),
    /// Put the photo search results into an element of an HTML document.
    Render(RenderArgs),
}

async fn fetch(args: &SharedApiArgs) -> Result<Vec<DisplayRecord>, Box<dyn std::error::Error>> {
    log::info!("Searching Flickr for pugs");
    let photos = fetch_photos(&args.api_key, SurfFetcher::new()).await?;
    log::info!("Got {} photos", photos.len());
    Ok(photos)
}

async fn print_json(args: SharedApiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let photos = fetch(&args).await?;
    println!("{}", serde_json::to_string_pretty(&photos)?);
    Ok(())
}

async fn print_list(args: SharedApiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let photos = fetch(&args).await?;
    println!("{}", photo_list_to_html(&photos));
    Ok(())
}

async fn render(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let photos = fetch(&args.api_arguments).await?;
    let list = photo_list_to_html(&photos);

    let document = render_into_file(&args.input, &args.selector, &list)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, document)?;
            log::info!("Wrote {}", path.display());
        },
        None => std::io::stdout().write_all(document.as_bytes())?,
    }

    Ok(())
}

#[async_std::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    match Command::from_args() {
        Command::Fetch(args) => print_json(args).await,
        Command::List(args) => print_list(args).await,
        Command::Render(args) => render(args).await,
    }
}
