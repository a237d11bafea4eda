use kuchikiki::traits::*;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

use super::{Document, DocumentError, Element};

/// A parsed HTML document. Cheap to clone, clones share the same tree.
#[derive(Clone)]
pub struct HtmlDocument {
    root: NodeRef,
}

#[derive(Clone)]
pub struct HtmlElement {
    node: NodeDataRef<ElementData>,
}

impl std::fmt::Debug for HtmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlElement")
            .field("tag", &self.tag_name())
            .finish()
    }
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        HtmlDocument {
            root: kuchikiki::parse_html().one(markup),
        }
    }

    pub fn to_html(&self) -> String {
        self.root.to_string()
    }
}

impl HtmlElement {
    pub fn tag_name(&self) -> &str {
        &self.node.name.local
    }

    pub fn text(&self) -> String {
        self.node.as_node().text_contents()
    }
}

fn select<I>(
    nodes: I,
    selector: &str,
) -> Result<impl Iterator<Item = HtmlElement>, DocumentError>
where
    I: NodeIterator,
{
    let matches = nodes
        .select(selector)
        .map_err(|()| DocumentError::InvalidSelector(selector.to_string()))?;

    Ok(matches.map(|node| HtmlElement { node }))
}

impl Document for HtmlDocument {
    type Element = HtmlElement;

    fn select_first(&self, selector: &str) -> Result<HtmlElement, DocumentError> {
        select(self.root.descendants(), selector)?
            .next()
            .ok_or_else(|| DocumentError::NotFound(selector.to_string()))
    }
}

impl Element for HtmlElement {
    fn set_inner_html(&self, html: &str) {
        let element = self.node.as_node();

        let old_children: Vec<_> = element.children().collect();
        for child in old_children {
            child.detach();
        }

        // Parse in the context of this element so that e.g. `<li>` or `<tr>`
        // fragments end up where they would in a browser.
        let fragment = kuchikiki::parse_fragment(self.node.name.clone(), Vec::new()).one(html);
        let container = fragment
            .children()
            .find(|node| {
                node.as_element()
                    .map_or(false, |el| &*el.name.local == "html")
            })
            .unwrap_or(fragment);

        let new_children: Vec<_> = container.children().collect();
        for child in new_children {
            element.append(child);
        }
    }

    fn inner_html(&self) -> String {
        self.node
            .as_node()
            .children()
            .map(|child| child.to_string())
            .collect()
    }

    fn find(&self, selector: &str) -> Result<Vec<HtmlElement>, DocumentError> {
        Ok(select(self.node.as_node().descendants(), selector)?.collect())
    }
}
