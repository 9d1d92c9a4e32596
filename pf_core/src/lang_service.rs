//! ホストに提供する機能

mod lang_service;
mod outline;

pub use lang_service::LangService;
pub use outline::OutlineItem;
