//! 汎用的なデータ構造など

mod debug_with;
mod vec_arena;

pub(crate) use debug_with::{DebugWith, DebugWithContext};
pub(crate) use vec_arena::{VecArena, VecArenaId};
