use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetches remote pages as text.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// A parsed document that can be searched by element identifier.
pub trait HtmlDocument {
    type Node<'a>: HtmlNode<'a>
    where
        Self: 'a;

    /// First element in document order whose `id` equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node<'_>>;
}

/// An element inside an [`HtmlDocument`].
pub trait HtmlNode<'a>: Copy + Sized {
    /// Descendant elements with the given tag name, in document order.
    fn descendants_named(&self, tag: &str) -> Vec<Self>;
    fn attr(&self, name: &str) -> Option<&'a str>;
    /// Concatenated text of all descendants.
    fn text(&self) -> String;
}
