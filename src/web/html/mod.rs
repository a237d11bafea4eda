use tide::{Request, Response};

use crate::fetcher::Fetch;
use crate::lister::photo_list_to_html;

mod utils;

pub(in super::super) fn mount<F>(route: &mut tide::Server<crate::State<F>>)
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    route.at("/").get(gallery::<F>);
}

async fn gallery<F>(req: Request<crate::State<F>>) -> tide::Result<Response>
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    let state = req.state();
    let photos = super::fetch_pugs(state).await?;
    let list = photo_list_to_html(&photos);

    let mut context = tera::Context::new();
    context.insert("title", "pugs");
    context.insert("photo_count", &photos.len());

    let body = utils::render(state, "gallery.html", &context, &list)?;
    let res = Response::builder(tide::http::StatusCode::Ok)
        .content_type("text/html")
        .body(body)
        .build();
    Ok(res)
}
