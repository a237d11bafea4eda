use std::path::Path;

use thiserror::Error;

use rusty_pugs::lister::{add_photos_to_element, DocumentError, HtmlDocument};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("couldn't read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't place the photo list")]
    Document(#[from] DocumentError),
}

/// Puts `list` into the element matched by `selector` and returns the whole
/// document serialized again.
pub fn render_into(markup: &str, selector: &str, list: &str) -> Result<String, DocumentError> {
    let document = HtmlDocument::parse(markup);
    let element = add_photos_to_element(&document, selector, list)?;
    log::debug!("Filled <{}> matched by {:?}", element.tag_name(), selector);
    Ok(document.to_html())
}

pub fn render_into_file(path: &Path, selector: &str, list: &str) -> Result<String, RenderError> {
    let markup = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(render_into(&markup, selector, list)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rusty_pugs::lister::photo_list_to_html;
    use rusty_pugs::DisplayRecord;

    const PAGE: &str = r#"<!DOCTYPE html><html><head><title>pugs</title></head><body><main><div id="app">Loading...</div></main></body></html>"#;

    #[test]
    fn renders_list_into_page() {
        let list = photo_list_to_html(&[
            DisplayRecord::new("one", "https://example.com/1.jpg"),
            DisplayRecord::new("two", "https://example.com/2.jpg"),
        ]);

        let rendered = render_into(PAGE, "#app", &list).unwrap();

        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains(&format!(r#"<div id="app">{}</div>"#, list.replace("/>", ">"))));
        assert!(!rendered.contains("Loading..."));
    }

    #[test]
    fn unknown_selector() {
        let err = render_into(PAGE, "#gallery", "<ul></ul>").unwrap_err();
        assert_eq!(err, DocumentError::NotFound("#gallery".into()));
    }

    #[test]
    fn missing_file() {
        let err = render_into_file(Path::new("/nonexistent/page.html"), "#app", "<ul></ul>")
            .unwrap_err();
        assert!(matches!(err, RenderError::Read { .. }));
    }
}
