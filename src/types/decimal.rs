//! Decimal type implementation (rust_decimal crate).

use rust_decimal::Decimal;

use crate::value::Value;

use super::ToValue;

// Numeric literal, emitted unquoted.
impl ToValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Opaque(self.to_string())
    }
}
