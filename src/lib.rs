//! Page trees for the Kryon Labs website.
//!
//! Pages are composed from typed nodes (`app::services::compose`) into an
//! [`app::AppConfig`] and handed to a rendering runtime through
//! [`app::Runtime`]. The site's own pages live in [`ui`].

pub mod app;
pub mod ui;
