use super::TPos;
use std::fmt::{self, Debug, Display, Formatter};

/// テキスト上の範囲
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TRange {
    /// 開始位置
    start: TPos,

    /// 終了位置 (終端は範囲外)
    end: TPos,
}

impl TRange {
    pub fn new(start: TPos, end: TPos) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> TPos {
        self.start
    }

    pub fn end(&self) -> TPos {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Debug for TRange {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for TRange {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}-{}.{}",
            self.start.row() + 1,
            self.start.column8() + 1,
            self.end.row() + 1,
            self.end.column8() + 1
        )
    }
}
