use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct StructurerConfig {
    /// Deepest nesting of arrays and objects accepted on input. Defaults to 128.
    pub max_depth: Option<usize>,
}
