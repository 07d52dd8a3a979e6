use strand_core::Value;

use super::names;
use crate::Gateway;

impl Gateway {
    /// True only when `path` is a string naming something that exists.
    ///
    /// Every other outcome, including a query that failed, is false. Never
    /// emits a diagnostic.
    pub fn file_exists(&self, path: &Value) -> bool {
        let Ok(bytes) = Self::expect_str(names::FILE_EXISTS, "path", path) else {
            return false;
        };
        self.fs_exists(bytes).exists()
    }
}
