//! The site's pages and the tables they share.

pub mod demos;
pub mod docs;
pub mod landing;
pub mod theme;

use crate::app::controllers::site::Page;

/// Every page the site ships, in build order.
pub static PAGES: &[Page] = &[
    Page::new("index", landing::app),
    Page::new("docs", docs::app),
    Page::new("text-wrapping-demo", demos::app),
];
