//! GUI module - User interface components

mod app;
mod card_viewer;
mod collection_viewer;
mod protect_viewer;

pub use app::PrivacyLensApp;
pub use card_viewer::CardViewer;
pub use collection_viewer::CollectionViewer;
pub use protect_viewer::ProtectViewer;
