use std::fmt::Debug;

/// 任意のエラー。batch で並列に扱うので Send を要求する。
pub(crate) struct DynError(Box<dyn Debug + Send + 'static>);

impl DynError {
    pub(crate) fn into_inner(self) -> Box<dyn Debug + Send + 'static> {
        self.0
    }
}

impl<T: Debug + Send + 'static> From<T> for DynError {
    fn from(value: T) -> Self {
        Self(Box::new(value))
    }
}
