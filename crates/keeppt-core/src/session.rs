//! Session collaborator types: opaque current user and the stored user id

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Local storage key holding the avatar user id
pub const USER_ID_KEY: &str = "userId";

/// Logged-in user as handed over by the session store.
///
/// The shell never looks inside; any shape is accepted, including `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentUser(Value);

impl CurrentUser {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn anonymous() -> Self {
        Self(Value::Null)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Identifier used only to build the avatar URL. No format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only key-value lookup (browser local storage, or a map in tests)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl KeyValueStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Look up the stored user id. Read once per shell mount.
pub fn read_user_id<S: KeyValueStore + ?Sized>(store: &S) -> Option<UserId> {
    store.get(USER_ID_KEY).map(UserId::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_user_id_present() {
        let store = HashMap::from([(USER_ID_KEY.to_string(), "u123".to_string())]);
        assert_eq!(read_user_id(&store), Some(UserId::new("u123")));
    }

    #[test]
    fn test_read_user_id_absent() {
        let store: HashMap<String, String> = HashMap::new();
        assert_eq!(read_user_id(&store), None);
    }

    #[test]
    fn test_user_id_is_raw_value() {
        let store = HashMap::from([(USER_ID_KEY.to_string(), "\"quoted\"".to_string())]);
        assert_eq!(
            read_user_id(&store).map(|id| id.to_string()),
            Some("\"quoted\"".to_string())
        );
    }

    #[test]
    fn test_current_user_is_opaque() {
        let user: CurrentUser = serde_json::from_value(json!({"anything": [1, 2]})).unwrap();
        assert_eq!(user.as_value()["anything"][1], 2);
        assert_eq!(CurrentUser::default(), CurrentUser::anonymous());
    }
}
