//! Account record: a registry-assigned id plus arbitrary client-supplied attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name reserved for the registry-assigned identifier.
pub const ID_FIELD: &str = "id";

/// Client-supplied attributes of an account, keyed by field name.
pub type AccountFields = Map<String, Value>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    #[serde(flatten)]
    pub fields: AccountFields,
}

impl Account {
    /// Builds a record with `id` forced; any `id` key in `fields` is discarded.
    pub fn new(id: u64, mut fields: AccountFields) -> Self {
        fields.remove(ID_FIELD);
        Account { id, fields }
    }

    /// Client-supplied attribute by name; `id` is never among them.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> AccountFields {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn client_id_is_overwritten() {
        let account = Account::new(3, fields(json!({"id": 99, "name": "John Doe"})));
        assert_eq!(account.id, 3);
        assert!(account.get(ID_FIELD).is_none());
        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            json!({"id": 3, "name": "John Doe"})
        );
    }

    #[test]
    fn serializes_flat() {
        let account = Account::new(
            1,
            fields(json!({"email": "john.doe@example.com", "phone_number": null, "age": 42})),
        );
        let v = serde_json::to_value(&account).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["email"], "john.doe@example.com");
        assert_eq!(v["phone_number"], Value::Null);
        assert_eq!(v["age"], 42);

        let back: Account = serde_json::from_value(v).unwrap();
        assert_eq!(back, account);
    }
}
