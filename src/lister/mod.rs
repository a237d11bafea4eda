//! Rendering display records as an HTML list and putting it into a page.

use thiserror::Error;

use crate::models::photos::DisplayRecord;

mod html;

pub use html::{HtmlDocument, HtmlElement};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("no element matches selector {0:?}")]
    NotFound(String),
    #[error("invalid selector {0:?}")]
    InvalidSelector(String),
}

/// A markup tree that can be queried with CSS selectors.
pub trait Document {
    type Element: Element;

    /// The first element matching `selector`, in document order.
    fn select_first(&self, selector: &str) -> Result<Self::Element, DocumentError>;
}

pub trait Element: Sized {
    /// Replaces all children of the element with `html` parsed as markup.
    fn set_inner_html(&self, html: &str);

    fn inner_html(&self) -> String;

    /// All descendants matching `selector`, not including the element itself.
    fn find(&self, selector: &str) -> Result<Vec<Self>, DocumentError>;
}

// Titles and URLs go in verbatim, nothing is escaped.
pub fn photo_to_list_item(photo: &DisplayRecord) -> String {
    format!(
        r#"<li><figure><img src="{}" alt=""/><figcaption>{}</figcaption></figure></li>"#,
        photo.url, photo.title
    )
}

pub fn photo_list_to_html(photos: &[DisplayRecord]) -> String {
    let items: String = photos.iter().map(photo_to_list_item).collect();
    format!("<ul>{}</ul>", items)
}

/// Sets the contents of the element matched by `selector` to `html` and
/// returns that element for further queries.
pub fn add_photos_to_element<D: Document>(
    document: &D,
    selector: &str,
    html: &str,
) -> Result<D::Element, DocumentError> {
    let element = document.select_first(selector)?;
    element.set_inner_html(html);
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ITEM_LIST: &str = concat!(
        r#"<ul><li><figure><img src="http://loremflickr.com/960/593" alt=""/>"#,
        r#"<figcaption>This is a test</figcaption></figure></li>"#,
        r#"<li><figure><img src="http://loremflickr.com/960/593/puppy" alt=""/>"#,
        r#"<figcaption>This is another test</figcaption></figure></li></ul>"#,
    );

    fn count(element: &HtmlElement, selector: &str) -> usize {
        element.find(selector).unwrap().len()
    }

    #[test]
    fn list_item_from_record() {
        let record = DisplayRecord::new("This is a test", "http://loremflickr.com/960/593");
        assert_eq!(
            photo_to_list_item(&record),
            r#"<li><figure><img src="http://loremflickr.com/960/593" alt=""/><figcaption>This is a test</figcaption></figure></li>"#
        );

        let record = DisplayRecord::new(
            "This is another test",
            "http://loremflickr.com/960/593/puppy",
        );
        assert_eq!(
            photo_to_list_item(&record),
            r#"<li><figure><img src="http://loremflickr.com/960/593/puppy" alt=""/><figcaption>This is another test</figcaption></figure></li>"#
        );
    }

    #[test]
    fn list_item_does_not_escape() {
        let record = DisplayRecord::new("<b>pugs & co</b>", r#"a"b"#);
        assert_eq!(
            photo_to_list_item(&record),
            r#"<li><figure><img src="a"b" alt=""/><figcaption><b>pugs & co</b></figcaption></figure></li>"#
        );
    }

    #[test]
    fn list_from_records() {
        let records = vec![
            DisplayRecord::new("This is a test", "http://loremflickr.com/960/593"),
            DisplayRecord::new(
                "This is another test",
                "http://loremflickr.com/960/593/puppy",
            ),
        ];
        assert_eq!(photo_list_to_html(&records), TWO_ITEM_LIST);
    }

    #[test]
    fn list_edge_cases() {
        assert_eq!(photo_list_to_html(&[]), "<ul></ul>");
        assert_eq!(
            photo_list_to_html(&[DisplayRecord::new("t", "u")]),
            r#"<ul><li><figure><img src="u" alt=""/><figcaption>t</figcaption></figure></li></ul>"#
        );
    }

    #[test]
    fn adds_list_to_selected_element() {
        let document = HtmlDocument::parse(
            r#"<html><head></head><body><div id="app"></div></body></html>"#,
        );

        let app = add_photos_to_element(&document, "#app", TWO_ITEM_LIST).unwrap();

        assert_eq!(count(&app, "ul"), 1);
        assert_eq!(count(&app, "li"), 2);
        assert_eq!(count(&app, "figure"), 2);
        assert_eq!(count(&app, "img"), 2);
        assert_eq!(count(&app, "figcaption"), 2);

        // The handle points into the document, not at a copy.
        let app = document.select_first("#app").unwrap();
        assert_eq!(count(&app, "li"), 2);
    }

    #[test]
    fn replaces_existing_content() {
        let document = HtmlDocument::parse(
            r#"<body><div id="app"><p>Loading…</p><ul><li>stale</li></ul></div></body>"#,
        );

        let app = add_photos_to_element(&document, "#app", "<ul></ul>").unwrap();

        assert_eq!(count(&app, "p"), 0);
        assert_eq!(count(&app, "li"), 0);
        assert_eq!(app.inner_html(), "<ul></ul>");
    }

    #[test]
    fn only_first_match_is_filled() {
        let document = HtmlDocument::parse(
            r#"<body><div class="photos"></div><div class="photos"></div></body>"#,
        );

        add_photos_to_element(&document, ".photos", TWO_ITEM_LIST).unwrap();

        let filled: Vec<_> = document
            .select_first("body")
            .unwrap()
            .find(".photos")
            .unwrap()
            .iter()
            .map(|el| el.find("li").unwrap().len())
            .collect();
        assert_eq!(filled, vec![2, 0]);
    }

    #[test]
    fn missing_element_is_an_error() {
        let document = HtmlDocument::parse(r#"<body><div id="app"></div></body>"#);

        let err = add_photos_to_element(&document, "#gallery", TWO_ITEM_LIST).unwrap_err();
        assert_eq!(err, DocumentError::NotFound("#gallery".to_string()));

        let err = add_photos_to_element(&document, "##", TWO_ITEM_LIST).unwrap_err();
        assert_eq!(err, DocumentError::InvalidSelector("##".to_string()));
    }
}
