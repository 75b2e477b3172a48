use crate::adapters::html::ScraperDocument;
use crate::core::table::{locate, CELL_TAG, ROW_TAG};
use crate::domain::ports::{HtmlDocument, HtmlNode, PageSource};
use crate::utils::error::Result;

const ANCHOR_TAG: &str = "a";

/// `href` values of anchors inside the table's cells, ordered by (row, cell, anchor).
pub fn links_in_table<D: HtmlDocument>(doc: &D, table_id: &str, url: &str) -> Result<Vec<String>> {
    let table = locate(doc, table_id, url)?;

    let mut links = Vec::new();
    for row in table.descendants_named(ROW_TAG) {
        for cell in row.descendants_named(CELL_TAG) {
            links.extend(
                cell.descendants_named(ANCHOR_TAG)
                    .iter()
                    .filter_map(|anchor| anchor.attr("href"))
                    .map(str::to_string),
            );
        }
    }
    Ok(links)
}

pub fn extract_links_html(body: &str, url: &str, table_id: &str) -> Result<Vec<String>> {
    let doc = ScraperDocument::parse(body);
    links_in_table(&doc, table_id, url)
}

/// Fetches `url` and collects the links listed in the table identified by `table_id`.
pub async fn extract_links<S: PageSource + ?Sized>(
    source: &S,
    url: &str,
    table_id: &str,
) -> Result<Vec<String>> {
    let body = source.fetch(url).await?;
    let links = extract_links_html(&body, url, table_id)?;
    tracing::debug!("{}: found {} links in table {}", url, links.len(), table_id);
    Ok(links)
}
