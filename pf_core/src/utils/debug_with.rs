use std::fmt::{self, Debug, Formatter};

/// 構文木のノードのように、ID だけでは中身を表示できない値のためのデバッグ出力。
pub(crate) trait DebugWithContext<Context> {
    /// コンテキスト (アリーナや構文木) を参照しつつ、デバッグ出力を行う。
    fn fmt(&self, context: &Context, f: &mut Formatter<'_>) -> fmt::Result;
}

/// デバッグ出力する値と、デバッグ出力に必要なコンテキストのペア。
///
/// `{:?}` や `{:#?}` で表示できる。
pub(crate) struct DebugWith<'a, T, Context> {
    value: &'a T,
    context: &'a Context,
}

impl<'a, T, Context> DebugWith<'a, T, Context> {
    pub(crate) fn new(value: &'a T, context: &'a Context) -> Self {
        Self { value, context }
    }
}

impl<'a, T, Context> Debug for DebugWith<'a, T, Context>
where
    T: DebugWithContext<Context>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        DebugWithContext::fmt(self.value, self.context, f)
    }
}
