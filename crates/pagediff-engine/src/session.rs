//! Document pair session state

use std::path::{Path, PathBuf};

/// Two open documents and their page counts
#[derive(Debug)]
pub struct LoadedPair<D> {
    pub(crate) doc_a: D,
    pub(crate) doc_b: D,
    pub(crate) path_a: PathBuf,
    pub(crate) path_b: PathBuf,
    pub(crate) pages_a: u32,
    pub(crate) pages_b: u32,
}

impl<D> LoadedPair<D> {
    /// Page count of the first document
    pub fn pages_a(&self) -> u32 {
        self.pages_a
    }

    /// Page count of the second document
    pub fn pages_b(&self) -> u32 {
        self.pages_b
    }

    /// Number of page indices the pair spans, `max(pages_a, pages_b)`
    pub fn page_span(&self) -> u32 {
        self.pages_a.max(self.pages_b)
    }

    /// Whether page `index` exists in both documents
    pub fn has_page(&self, index: u32) -> bool {
        index < self.pages_a && index < self.pages_b
    }

    /// File names of both documents, if the paths have one
    pub fn names(&self) -> (Option<&str>, Option<&str>) {
        (file_name(&self.path_a), file_name(&self.path_b))
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Lifecycle of a document pair
///
/// `Empty` until documents are loaded; dropping the `Loaded` pair closes
/// both documents.
#[derive(Debug)]
pub enum DocumentPairSession<D> {
    /// No documents loaded
    Empty,
    /// Both documents open
    Loaded(LoadedPair<D>),
}

impl<D> Default for DocumentPairSession<D> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<D> DocumentPairSession<D> {
    /// The loaded pair, if any
    pub fn loaded(&self) -> Option<&LoadedPair<D>> {
        match self {
            Self::Empty => None,
            Self::Loaded(pair) => Some(pair),
        }
    }

    /// Whether documents are loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Drop any loaded pair and return to `Empty`.
    pub fn close(&mut self) {
        *self = Self::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(pages_a: u32, pages_b: u32) -> LoadedPair<()> {
        LoadedPair {
            doc_a: (),
            doc_b: (),
            path_a: PathBuf::from("/tmp/a/old.pdf"),
            path_b: PathBuf::from("new.pdf"),
            pages_a,
            pages_b,
        }
    }

    #[test]
    fn test_page_span_and_presence() {
        let p = pair(3, 5);
        assert_eq!(p.page_span(), 5);
        assert!(p.has_page(2));
        assert!(!p.has_page(3));
        assert_eq!(p.names(), (Some("old.pdf"), Some("new.pdf")));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut session = DocumentPairSession::Loaded(pair(1, 1));
        assert!(session.is_loaded());
        session.close();
        assert!(!session.is_loaded());
        session.close();
        assert!(session.loaded().is_none());
    }
}
