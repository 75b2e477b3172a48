use crate::domain::ports::{HtmlDocument, HtmlNode};
use scraper::{ElementRef, Html};

/// [`HtmlDocument`] backed by the `scraper` crate.
///
/// `Html` is not `Send`; build and drop it between await points.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

impl HtmlDocument for ScraperDocument {
    type Node<'a>
        = ElementRef<'a>
    where
        Self: 'a;

    fn element_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
    }
}

impl<'a> HtmlNode<'a> for ElementRef<'a> {
    fn descendants_named(&self, tag: &str) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .collect()
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="intro"><p>hello</p></div>
          <table id="regions">
            <tr><td>a <b>bold</b> cell</td><td><a href="/one">1</a></td></tr>
            <tr><td><a>no href</a></td><td><a href="/two">2</a><a href="/three">3</a></td></tr>
          </table>
          <span id="regions">duplicate id</span>
        </body></html>
    "#;

    #[test]
    fn test_element_by_id_returns_first_match() {
        let doc = ScraperDocument::parse(PAGE);
        let table = doc.element_by_id("regions").unwrap();
        assert_eq!(table.value().name(), "table");
        assert!(doc.element_by_id("missing").is_none());
    }

    #[test]
    fn test_descendants_in_document_order() {
        let doc = ScraperDocument::parse(PAGE);
        let table = doc.element_by_id("regions").unwrap();

        let rows = table.descendants_named("tr");
        assert_eq!(rows.len(), 2);

        let hrefs: Vec<Option<&str>> = table
            .descendants_named("a")
            .iter()
            .map(|a| HtmlNode::attr(a, "href"))
            .collect();
        assert_eq!(hrefs, vec![Some("/one"), None, Some("/two"), Some("/three")]);
    }

    #[test]
    fn test_text_concatenates_descendants() {
        let doc = ScraperDocument::parse(PAGE);
        let table = doc.element_by_id("regions").unwrap();
        let first_cell = table.descendants_named("td")[0];
        assert_eq!(HtmlNode::text(&first_cell), "a bold cell");
    }
}
