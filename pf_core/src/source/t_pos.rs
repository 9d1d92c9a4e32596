use super::TRange;
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Text position. 構文木をテキストにしたときの位置。
///
/// 編集結果をホスト (エディター) に返すのに使う。
/// エディターによって列番号の数え方が違うので、UTF-8 と UTF-16 の両方を持つ。
#[derive(Copy, Clone)]
pub struct TPos {
    /// テキストの先頭から、この位置の手前までのバイト数 (UTF-8)
    index: u32,

    /// 行番号: テキスト中の改行の個数。0 から始まる。
    row: u32,

    /// 列番号: 最後の改行より後にある文字列の長さ (UTF-8)
    column8: u32,

    /// 列番号: 最後の改行より後にある文字列の長さ (UTF-16)
    column16: u32,
}

impl TPos {
    pub const ZERO: TPos = TPos {
        index: 0,
        row: 0,
        column8: 0,
        column16: 0,
    };

    const LF: TPos = TPos {
        index: 1,
        row: 1,
        column8: 0,
        column16: 0,
    };

    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn column8(self) -> usize {
        self.column8 as usize
    }

    pub fn column16(self) -> usize {
        self.column16 as usize
    }

    pub fn to_empty_range(self) -> TRange {
        TRange::new(self, self)
    }
}

impl From<char> for TPos {
    fn from(c: char) -> Self {
        if c == '\n' {
            return TPos::LF;
        }

        let column8 = c.len_utf8() as u32;
        TPos {
            index: column8,
            row: 0,
            column8,
            column16: c.len_utf16() as u32,
        }
    }
}

impl From<&'_ str> for TPos {
    fn from(s: &str) -> Self {
        s.chars().map(TPos::from).sum::<TPos>()
    }
}

impl AddAssign for TPos {
    fn add_assign(&mut self, other: Self) {
        if other.row >= 1 {
            self.column8 = 0;
            self.column16 = 0;
        }

        self.index += other.index;
        self.row += other.row;
        self.column8 += other.column8;
        self.column16 += other.column16;
    }
}

impl Add for TPos {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for TPos {
    fn sum<I: Iterator<Item = TPos>>(iter: I) -> TPos {
        iter.fold(TPos::ZERO, Add::add)
    }
}

impl Debug for TPos {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for TPos {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // <https://www.gnu.org/prep/standards/html_node/Errors.html>
        write!(f, "{}:{}", self.row + 1, self.column8 + 1)
    }
}

// 同じテキスト上の位置なら、インデックスだけで比較できる。

impl PartialEq for TPos {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for TPos {}

impl PartialOrd for TPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TPos {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl Hash for TPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}
