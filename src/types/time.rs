//! Time crate type implementations (Date, Time, PrimitiveDateTime, OffsetDateTime).

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::value::Value;

use super::ToValue;

// Formatting only fails for descriptions the value cannot satisfy; fall back
// to the Display form rather than dropping the argument.
fn text_or_display<T: std::fmt::Display>(formatted: Result<String, time::error::Format>, v: &T) -> Value {
    Value::Text(formatted.unwrap_or_else(|_| v.to_string()))
}

impl ToValue for Date {
    fn to_value(&self) -> Value {
        text_or_display(self.format(format_description!("[year]-[month]-[day]")), self)
    }
}

impl ToValue for Time {
    fn to_value(&self) -> Value {
        text_or_display(
            self.format(format_description!("[hour]:[minute]:[second]")),
            self,
        )
    }
}

impl ToValue for PrimitiveDateTime {
    fn to_value(&self) -> Value {
        text_or_display(
            self.format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            )),
            self,
        )
    }
}

impl ToValue for OffsetDateTime {
    fn to_value(&self) -> Value {
        text_or_display(self.format(&Rfc3339), self)
    }
}
