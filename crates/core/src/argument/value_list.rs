use indexmap::IndexMap;

/// Key under which positional values and options nothing declared end up.
///
/// Every unclaimed positional value is written to this single key, so only
/// the last one survives.
pub const USER_DATA: &str = "__user_data__";

/// The resolved key → value mapping a command receives.
///
/// Keys keep the order they were first bound in; re-binding a key replaces
/// its value in place. A `None` value marks a flag supplied without a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentValueList {
    values: IndexMap<String, Option<String>>,
}

impl ArgumentValueList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Whether `key` was bound at all, with or without a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The value bound to `key`; `None` when absent or bound as a bare flag.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Option::as_deref)
    }

    /// The first entry bound, used to spot requests for built-in commands.
    #[must_use]
    pub fn first(&self) -> Option<(&str, Option<&str>)> {
        self.values
            .first()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut values = ArgumentValueList::new();
        values.set("id", Some("abcde".to_string()));
        values.set("force", None);

        assert_eq!(values.get("id"), Some("abcde"));
        assert_eq!(values.get("force"), None);
        assert!(values.contains("force"));
        assert!(!values.contains("missing"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_rebinding_keeps_position() {
        let mut values = ArgumentValueList::new();
        values.set(USER_DATA, Some("one".to_string()));
        values.set("id", Some("x".to_string()));
        values.set(USER_DATA, Some("two".to_string()));

        assert_eq!(values.first(), Some((USER_DATA, Some("two"))));
        let keys: Vec<&str> = values.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![USER_DATA, "id"]);
    }

    #[test]
    fn test_first_of_empty() {
        let values = ArgumentValueList::new();
        assert!(values.first().is_none());
        assert!(values.is_empty());
    }
}
