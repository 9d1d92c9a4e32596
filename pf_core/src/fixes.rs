//! クイックフィックス

mod anchor;
mod make_public;

pub(crate) use anchor::resolve_anchor;
pub use make_public::{MakePublicFix, TextEdit};
