use serde::Deserialize;

/// Query defaults. Deserializable so an embedding application can keep it
/// in its own settings file; missing keys fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Count used by `top_by_amount`
    pub default_top_n: usize,
}

impl QueryConfig {
    pub const DEFAULT_TOP_N: usize = 3;

    pub fn with_default_top_n(mut self, default_top_n: usize) -> Self {
        self.default_top_n = default_top_n;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_top_n: Self::DEFAULT_TOP_N,
        }
    }
}
