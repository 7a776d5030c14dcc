//! Built-in service block catalog data
//!
//! One module per category, mirroring how the catalog is curated. The data is
//! assembled into a single verified [`Catalog`] exposed process-wide through
//! [`builtin`].

pub mod cache;
pub mod database;
pub mod frameworks;
pub mod mail;
pub mod queue;
pub mod runtime;
pub mod search;
pub mod storage;
pub mod tools;
pub mod webserver;
pub mod websocket;

use once_cell::sync::Lazy;

use crate::core::{Catalog, ServiceBlock};

/// All built-in block definitions in catalog order.
pub fn all_blocks() -> Vec<ServiceBlock> {
    let mut blocks = Vec::new();
    blocks.extend(runtime::runtime_blocks());
    blocks.extend(frameworks::framework_blocks());
    blocks.extend(webserver::webserver_blocks());
    blocks.extend(database::database_blocks());
    blocks.extend(cache::cache_blocks());
    blocks.extend(search::search_blocks());
    blocks.extend(queue::queue_blocks());
    blocks.extend(mail::mail_blocks());
    blocks.extend(websocket::websocket_blocks());
    blocks.extend(storage::storage_blocks());
    blocks.extend(tools::tools_blocks());
    blocks
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::from_blocks(all_blocks()).expect("builtin catalog has duplicate block ids");
    let errors = catalog.integrity_errors();
    assert!(errors.is_empty(), "builtin catalog failed integrity check: {errors:?}");
    catalog
});

/// The process-wide built-in catalog. Built and integrity-checked on first
/// use, immutable afterwards; the data is trusted static content, so a
/// failure here is an authoring defect and panics at startup.
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}
