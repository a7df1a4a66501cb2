//! UUID type implementation (uuid crate).

use crate::value::Value;

use super::ToValue;

impl ToValue for uuid::Uuid {
    fn to_value(&self) -> Value {
        Value::Text(self.hyphenated().to_string())
    }
}
