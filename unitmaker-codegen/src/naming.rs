//! Names used inside generated tests.

use std::collections::HashSet;

/// Prefix `go test` requires on test functions.
pub const TEST_PREFIX: &str = "Test";

/// Variable that captures the (first) result of the call under test.
pub const RESULT_HOLDER: &str = "got";

/// Name of the `*testing.T` parameter of every generated test.
pub const TESTING_PARAM: &str = "t";

/// Test function name for a Go function.
pub fn test_name(function: &str) -> String {
    format!("{TEST_PREFIX}{function}")
}

/// Result holder names for a call returning `count` values.
///
/// One value is captured as `got`; more are `got, got1, got2, ...`.
pub fn result_holders(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i {
            0 => RESULT_HOLDER.to_string(),
            i => format!("{RESULT_HOLDER}{i}"),
        })
        .collect()
}

/// Go's blank identifier.
const BLANK: &str = "_";

/// Picks local variable names for the mocked parameters of one test.
///
/// Every name is unique within the test body and never shadows `t`, a result
/// holder or the function under test. Parameters keep their declared name
/// when it is free; otherwise they get an `Arg` suffix. Unnamed and blank
/// parameters get `argN`, avoiding every declared parameter name.
#[derive(Debug, Clone)]
pub struct MockNames {
    taken: HashSet<String>,
    declared: HashSet<String>,
}

impl MockNames {
    pub fn new<'a>(
        callee: &str,
        holders: &[String],
        declared: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let taken = [TESTING_PARAM, callee]
            .into_iter()
            .map(str::to_string)
            .chain(holders.iter().cloned())
            .collect();
        let declared = declared
            .into_iter()
            .filter(|name| *name != BLANK)
            .map(str::to_string)
            .collect();
        Self { taken, declared }
    }

    /// Name for the parameter at `position`.
    pub fn assign(&mut self, name: Option<&str>, position: usize) -> String {
        let name = match name {
            Some(name) if name != BLANK && !self.taken.contains(name) => name.to_string(),
            Some(name) if name != BLANK => self.fresh(name.to_string()),
            _ => self.fresh(format!("arg{position}")),
        };
        self.taken.insert(name.clone());
        name
    }

    fn fresh(&self, mut name: String) -> String {
        while self.taken.contains(&name) || self.declared.contains(&name) {
            name.push_str("Arg");
        }
        name
    }
}
