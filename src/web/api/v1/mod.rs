use tide::{Request, Response};

use crate::fetcher::Fetch;

pub(super) fn mount<F>(mut route: tide::Route<crate::State<F>>)
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    route.at("/photos").get(list_photos::<F>);
}

async fn list_photos<F>(req: Request<crate::State<F>>) -> tide::Result<Response>
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    let photos = crate::web::fetch_pugs(req.state()).await?;
    tracing::debug!(count = photos.len(), "serving photos");

    let res = Response::builder(tide::http::StatusCode::Ok)
        .body(tide::Body::from_json(&photos)?)
        .build();
    Ok(res)
}
