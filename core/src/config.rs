//! Demonstration inputs

use crate::names::KAKAO_FRIENDS;

/// Inputs for one demonstration run.
///
/// `Default` reproduces the fixed inputs of the original walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// `(captured, argument)` for the nested-function capture.
    pub nested_capture: (i64, i64),
    /// `(captured, argument)` for the closure capture.
    pub closure_capture: (i64, i64),
    /// Initial contents of the name list.
    pub names: Vec<String>,
    /// Inputs for the nested-function, closure and short-closure sorts.
    pub sort_inputs: [Vec<i64>; 3],
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            nested_capture: (5, 10),
            closure_capture: (3, 5),
            names: KAKAO_FRIENDS.iter().map(|name| name.to_string()).collect(),
            sort_inputs: [vec![3, 1, 2], vec![8, 6, 9], vec![10, 5, 6]],
        }
    }
}
