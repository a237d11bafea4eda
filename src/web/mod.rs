use std::error::Error as _;

use tide::{Middleware, Next, Request, StatusCode};
use tracing::{error, field, info, info_span, Instrument};

use crate::fetcher::{fetch_photos, Fetch};
use crate::models::photos::DisplayRecord;

pub mod api;
pub mod html;

pub(super) fn mount<F>(app: &mut tide::Server<crate::State<F>>)
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    app.with(RequestSpan);
    html::mount(app);
    api::mount(app.at("/api"));
}

/// Searches Flickr with the configured key. Failures upstream are reported
/// to the client as a bad gateway.
pub(crate) async fn fetch_pugs<F>(state: &crate::State<F>) -> tide::Result<Vec<DisplayRecord>>
where
    F: Fetch + Sync,
{
    fetch_photos(&state.args.api_key, &state.fetcher)
        .await
        .map_err(|err| {
            error!(error = %err, cause = ?err.source().map(ToString::to_string), "photo search failed");
            tide::Error::new(StatusCode::BadGateway, err)
        })
}

/// Wraps every request in a span carrying the method, path and final status.
struct RequestSpan;

#[tide::utils::async_trait]
impl<State: Clone + Send + Sync + 'static> Middleware<State> for RequestSpan {
    async fn handle(&self, req: Request<State>, next: Next<'_, State>) -> tide::Result {
        let span = info_span!(
            "request",
            http.method = %req.method(),
            http.path = %req.url().path(),
            http.status = field::Empty,
        );

        let res = next.run(req).instrument(span.clone()).await;

        let status = u16::from(res.status());
        span.record("http.status", &status);
        span.in_scope(|| info!(status, "request finished"));

        Ok(res)
    }
}
