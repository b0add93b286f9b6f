use itertools::Itertools;
use std::collections::HashMap;

/// The variable results are stored in when no other name is given.
pub const DEFAULT_VARIABLE_NAME: &str = "ans";

/// Named values that expressions can refer to.
///
/// Names are case-sensitive. Entries are only ever added or overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    variables: HashMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Names of all variables, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.variables.keys().cloned().collect()
    }

    /// Names of all variables in lexicographic order.
    pub fn sorted_names(&self) -> Vec<String> {
        self.variables.keys().sorted().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_store_is_empty() {
        let store = VariableStore::new();
        assert!(store.is_empty());
        assert!(!store.exists(DEFAULT_VARIABLE_NAME));
        assert_eq!(store.get("x"), None);
    }

    #[test]
    fn set_value_can_be_read_back() {
        let mut store = VariableStore::new();
        store.set("x", 5.0);
        assert!(store.exists("x"));
        assert_eq!(store.get("x"), Some(5.0));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = VariableStore::new();
        store.set("x", 5.0);
        store.set("x", -1.5);
        assert_eq!(store.get("x"), Some(-1.5));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut store = VariableStore::new();
        store.set("x", 1.0);
        assert!(!store.exists("X"));
    }

    #[test]
    fn sorted_names_lists_every_variable_once() {
        let mut store = VariableStore::new();
        store.set("b", 2.0);
        store.set("ans", 3.0);
        store.set("a", 1.0);
        store.set("b", 4.0);

        let mut names = store.names();
        names.sort();

        assert_eq!(store.sorted_names(), vec!["a", "ans", "b"]);
        assert_eq!(names, store.sorted_names());
    }
}
