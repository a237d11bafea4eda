use html_minifier::HTMLMinifier;
use tera::Context;
use thiserror::Error;
use tracing::error;

use crate::lister::{add_photos_to_element, DocumentError, HtmlDocument};
use crate::State;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("rendering error")]
    Tera(#[from] tera::Error),
    #[error("could not place photo list in page")]
    Document(#[from] DocumentError),
}

/// Renders `template` and fills the element matched by the configured
/// selector with `photo_list`.
pub(super) fn render<F>(
    state: &State<F>,
    template: &'static str,
    context: &Context,
    photo_list: &str,
) -> Result<String, TemplateError> {
    let rendered = state.tera.render(template, context)?;

    let rendered = {
        let document = HtmlDocument::parse(&rendered);
        add_photos_to_element(&document, &state.args.selector, photo_list)?;
        document.to_html()
    };

    let mut html_minifier = HTMLMinifier::new();
    if let Err(err) = html_minifier.digest(&rendered) {
        error!("Failed to minify HTML: {}", err);
        return Ok(rendered);
    };

    let minified = match std::str::from_utf8(html_minifier.get_html()) {
        Ok(minified) => minified.to_string(),
        Err(err) => {
            error!("Failed to parse minified HTML as UTF-8: {}", err);
            rendered
        },
    };

    Ok(minified)
}
