//! ドキュメントとテキスト上の位置

mod doc;
mod t_pos;
mod t_range;

pub use doc::Doc;
pub use t_pos::TPos;
pub use t_range::TRange;
