pub mod v1;

use crate::fetcher::Fetch;

pub(super) fn mount<F>(mut route: tide::Route<crate::State<F>>)
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    v1::mount(route.at("/v1"));
}
