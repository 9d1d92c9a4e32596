use super::debug_with::DebugWithContext;
use std::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::size_of,
    num::NonZeroU32,
    ops::{Index, IndexMut},
};

// -----------------------------------------------
// VecArenaId
// -----------------------------------------------

/// `VecArena` の型つきのインデックス。
///
/// `Tag` は値を区別するための幽霊型。トークンの ID と構文要素の ID を取り違えると型エラーになる。
///
/// 内部表現は `NonZeroU32` なので、`Option<VecArenaId>` も4バイトに収まる。
/// (構文木は親へのリンクを `Option` で持つので、これが効く。)
pub(crate) struct VecArenaId<Tag> {
    inner: NonZeroU32,
    _phantom: PhantomData<Tag>,
}

impl<Tag> VecArenaId<Tag> {
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index < u32::MAX as usize);

        let inner = match NonZeroU32::new(index as u32 + 1) {
            Some(inner) => inner,
            None => unreachable!(),
        };
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn to_index(self) -> usize {
        (self.inner.get() - 1) as usize
    }

    pub(crate) fn of<T>(self, arena: &VecArena<Tag, T>) -> &T {
        &arena.inner[self.to_index()]
    }

    pub(crate) fn of_mut<T>(self, arena: &mut VecArena<Tag, T>) -> &mut T {
        &mut arena.inner[self.to_index()]
    }
}

// derive(Clone) だと Tag: Clone のときしか実装されない。
impl<Tag> Clone for VecArenaId<Tag> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner,
            _phantom: PhantomData,
        }
    }
}

impl<Tag> Copy for VecArenaId<Tag> {}

impl<Tag> PartialEq for VecArenaId<Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Tag> Eq for VecArenaId<Tag> {}

impl<Tag> Hash for VecArenaId<Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self.inner, state)
    }
}

impl<Tag> Debug for VecArenaId<Tag> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_index(), f)
    }
}

#[allow(dead_code)]
const SIZE_OF_ID_OPTION_IS_4_BYTE: [(); 0] = [(); 4 - size_of::<Option<VecArenaId<()>>>()];

// -----------------------------------------------
// VecArena
// -----------------------------------------------

/// 型つき ID によりインデックスアクセス可能な `Vec`
///
/// 要素は追加されるだけで、削除されない。
/// 構文木から切り離されたノードも、データはアリーナに残り続ける。
pub(crate) struct VecArena<Tag, T> {
    inner: Vec<T>,
    _phantom: PhantomData<*mut Tag>,
}

impl<Tag, T> VecArena<Tag, T> {
    pub(crate) const fn new() -> Self {
        Self {
            inner: vec![],
            _phantom: PhantomData,
        }
    }

    pub(crate) fn has(&self, id: VecArenaId<Tag>) -> bool {
        id.to_index() < self.inner.len()
    }

    pub(crate) fn alloc(&mut self, value: T) -> VecArenaId<Tag> {
        let id = VecArenaId::from_index(self.inner.len());
        self.inner.push(value);
        id
    }

    pub(crate) fn get(&self, id: VecArenaId<Tag>) -> Option<&T> {
        self.inner.get(id.to_index())
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = VecArenaId<Tag>> {
        (0..self.inner.len()).map(VecArenaId::from_index)
    }

    pub(crate) fn enumerate(&self) -> impl Iterator<Item = (VecArenaId<Tag>, &T)> {
        self.keys().zip(&self.inner)
    }
}

impl<Tag, T: Debug> Debug for VecArena<Tag, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.enumerate()).finish()
    }
}

// アリーナへの参照があれば ID の内容をデバッグ表示できる。
impl<Tag, T> DebugWithContext<VecArena<Tag, T>> for VecArenaId<Tag>
where
    T: Debug,
{
    fn fmt(&self, arena: &VecArena<Tag, T>, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.of(arena), f)
    }
}

impl<Tag, T> Default for VecArena<Tag, T> {
    fn default() -> Self {
        VecArena::new()
    }
}

impl<Tag, T> Index<VecArenaId<Tag>> for VecArena<Tag, T> {
    type Output = T;

    fn index(&self, id: VecArenaId<Tag>) -> &T {
        id.of(self)
    }
}

impl<Tag, T> IndexMut<VecArenaId<Tag>> for VecArena<Tag, T> {
    fn index_mut(&mut self, id: VecArenaId<Tag>) -> &mut T {
        id.of_mut(self)
    }
}

// -----------------------------------------------
// テスト
// -----------------------------------------------
