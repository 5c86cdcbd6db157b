use serde_json::Value;

use crate::{ErrorKind, Result, StructurerConfig, TypeDesc};

/// A type that can be built from a json-rpc value and turned back into one.
///
/// The set of impls is the handler registry. Leaves (integers, byte strings, addresses,
/// labels) and composites (optionals, sequences, tuples) are implemented in this crate;
/// records and unions are generated by [`record!`](crate::record!) and
/// [`one_of!`](crate::one_of!).
pub trait Structure: Sized {
    fn describe() -> TypeDesc;

    /// Builds a value. Nested values must go through [`Context::structure`] so depth is tracked.
    fn structure(cx: &mut Context, value: &Value) -> Result<Self>;

    /// Never fails for a value that was successfully constructed.
    fn unstructure(&self) -> Value;

    /// Value to use when a record field of this type is missing.
    /// `None` makes the field required.
    fn absent() -> Option<Self> {
        None
    }

    /// Whether a record leaves this field out of its output.
    fn is_absent(&self) -> bool {
        false
    }
}

/// State of a single structuring pass.
pub struct Context {
    depth: usize,
    max_depth: usize,
}

impl Context {
    fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    pub fn structure<T: Structure>(&mut self, value: &Value) -> Result<T> {
        if self.depth >= self.max_depth {
            return Err(ErrorKind::TooDeep {
                limit: self.max_depth,
            }
            .into());
        }

        self.depth += 1;
        let res = T::structure(self, value);
        self.depth -= 1;

        res
    }
}

/// Entry point for converting between json-rpc values and typed records.
///
/// Holds no per call state, so one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct Structurer {
    max_depth: usize,
}

impl Structurer {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn new(config: StructurerConfig) -> Self {
        Self {
            max_depth: config.max_depth.unwrap_or(Self::DEFAULT_MAX_DEPTH),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn structure<T: Structure>(&self, value: &Value) -> Result<T> {
        log::trace!("structuring {}", T::describe());

        let mut cx = Context::new(self.max_depth);
        cx.structure(value).inspect_err(|e| {
            log::debug!("failed to structure {}: {}", T::describe(), e);
        })
    }

    pub fn structure_str<T: Structure>(&self, json: &str) -> Result<T> {
        let value: Value = serde_json::from_str(json)?;
        self.structure(&value)
    }

    pub fn unstructure<T: Structure>(&self, value: &T) -> Value {
        value.unstructure()
    }

    pub fn unstructure_string<T: Structure>(&self, value: &T) -> String {
        self.unstructure(value).to_string()
    }
}

impl Default for Structurer {
    fn default() -> Self {
        STRUCTURER.clone()
    }
}

/// Process wide structurer with the default configuration.
pub static STRUCTURER: Structurer = Structurer {
    max_depth: Structurer::DEFAULT_MAX_DEPTH,
};

/// Structures `value` into `T` with [`STRUCTURER`].
pub fn structure<T: Structure>(value: &Value) -> Result<T> {
    STRUCTURER.structure(value)
}

/// Unstructures `value` into json with [`STRUCTURER`].
pub fn unstructure<T: Structure>(value: &T) -> Value {
    STRUCTURER.unstructure(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{structure, Structurer};
    use crate::{ErrorKind, StructurerConfig};

    #[test]
    fn test_depth_limit() {
        let structurer = Structurer::new(StructurerConfig { max_depth: Some(3) });

        let ok: Vec<Vec<u64>> = structurer.structure(&json!([["0x1"]])).unwrap();
        assert_eq!(ok, vec![vec![1]]);

        let err = structurer
            .structure::<Vec<Vec<Vec<u64>>>>(&json!([[["0x1"]]]))
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TooDeep { limit: 3 }));
        assert_eq!(err.to_string(), "[0][0][0]: value is nested deeper than 3 levels");
    }

    #[test]
    fn test_default_config() {
        let config: StructurerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(
            Structurer::new(config).max_depth(),
            Structurer::DEFAULT_MAX_DEPTH
        );
        assert_eq!(
            Structurer::default().max_depth(),
            Structurer::DEFAULT_MAX_DEPTH
        );
    }

    #[test]
    fn test_structure_str() {
        let v: Option<u64> = Structurer::default().structure_str("\"0x2a\"").unwrap();
        assert_eq!(v, Some(42));

        let err = Structurer::default()
            .structure_str::<u64>("{not json")
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Json(_)));
    }

    #[test]
    fn test_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Structurer>();
    }

    #[test]
    fn test_top_level_helpers() {
        let v: Vec<u64> = structure(&json!(["0x0", "0xff"])).unwrap();
        assert_eq!(super::unstructure(&v), json!(["0x0", "0xff"]));
    }
}
