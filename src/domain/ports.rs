use crate::utils::error::Result;

/// Where a map is persisted. Reads return the full text; writes replace it in full.
pub trait MapStore {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;
    fn read_map(&self) -> Result<String>;
    fn write_map(&self, contents: &str) -> Result<()>;
}

impl<S: MapStore + ?Sized> MapStore for &S {
    fn location(&self) -> String {
        (**self).location()
    }

    fn read_map(&self) -> Result<String> {
        (**self).read_map()
    }

    fn write_map(&self, contents: &str) -> Result<()> {
        (**self).write_map(contents)
    }
}
