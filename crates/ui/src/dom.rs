use web_sys::{window, Document};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}
