use crate::adapters::html::ScraperDocument;
use crate::core::schema::{decode_row, Column, EI_TABLE_COLUMNS};
use crate::domain::model::EconomicRegionRecord;
use crate::domain::ports::{HtmlDocument, HtmlNode, PageSource};
use crate::utils::error::{EiError, Result};

pub(crate) const ROW_TAG: &str = "tr";
pub(crate) const CELL_TAG: &str = "td";

/// Finds the element with `table_id`. A missing table is an error, never "no data".
pub(crate) fn locate<'d, D: HtmlDocument>(
    doc: &'d D,
    table_id: &str,
    url: &str,
) -> Result<D::Node<'d>> {
    doc.element_by_id(table_id).ok_or_else(|| EiError::NotFound {
        table_id: table_id.to_string(),
        url: url.to_string(),
    })
}

/// Decodes every row of the table into a record, dropping rows with no data.
pub fn records_in_table<D: HtmlDocument>(
    doc: &D,
    table_id: &str,
    url: &str,
    columns: &[Column],
) -> Result<Vec<EconomicRegionRecord>> {
    let table = locate(doc, table_id, url)?;

    let records: Vec<EconomicRegionRecord> = table
        .descendants_named(ROW_TAG)
        .into_iter()
        .map(|row| {
            let cells: Vec<String> = row
                .descendants_named(CELL_TAG)
                .iter()
                .map(|cell| cell.text())
                .collect();
            decode_row(columns, &cells)
        })
        .filter(|record| !record.is_empty())
        .collect();

    Ok(records)
}

pub fn parse_table_html(body: &str, url: &str, table_id: &str) -> Result<Vec<EconomicRegionRecord>> {
    let doc = ScraperDocument::parse(body);
    records_in_table(&doc, table_id, url, &EI_TABLE_COLUMNS)
}

/// Fetches `url` and decodes the table identified by `table_id`.
pub async fn parse_table<S: PageSource + ?Sized>(
    source: &S,
    url: &str,
    table_id: &str,
) -> Result<Vec<EconomicRegionRecord>> {
    let body = source.fetch(url).await?;
    let records = parse_table_html(&body, url, table_id)?;
    tracing::debug!("{}: kept {} rows from table {}", url, records.len(), table_id);
    Ok(records)
}
