//! Hydration of raw JSON results into typed values.

use serde::{
    Deserializer,
    de::{self, DeserializeOwned},
};

use crate::{method::Shape, prelude::*};

/// Convert the raw result into `R`, after checking it against the declared shape.
///
/// Unknown fields are kept by the model types themselves, see [`crate::types::Extra`].
pub fn hydrate<R: DeserializeOwned>(value: Value, shape: Shape) -> Result<R> {
    let matches = match (shape, &value) {
        (Shape::Scalar, value) => !value.is_object() && !value.is_array(),
        (Shape::Object, Value::Object(_))
        | (Shape::ObjectOrBool, Value::Object(_) | Value::Bool(_)) => true,
        (Shape::Array, Value::Array(items)) => items.iter().all(Value::is_object),
        _ => false,
    };
    if !matches {
        return Err(Error::malformed(format!("expected {shape}, got {}", json_type(&value))));
    }
    serde_json::from_value(value)
        .map_err(|error| Error::malformed(format!("failed to hydrate the result: {error:#}")))
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Result that is an object or a plain boolean, depending on the JSON type.
///
/// Editing methods return the edited [`crate::types::Message`] for messages sent by the bot,
/// and `true` for inline messages.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectOrBool<T> {
    Object(T),
    Bool(bool),
}

impl<T> ObjectOrBool<T> {
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&T> {
        match self {
            Self::Object(object) => Some(object),
            Self::Bool(_) => None,
        }
    }

    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Object(object) => Some(object),
            Self::Bool(_) => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ObjectOrBool<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Ok(Self::Bool(flag)),
            value @ Value::Object(_) => {
                T::deserialize(value).map(Self::Object).map_err(de::Error::custom)
            }
            other => Err(de::Error::custom(format!(
                "expected an object or a boolean, got {}",
                json_type(&other),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;
    use serde_json::json;

    use super::*;
    use crate::types::{Message, User};

    #[test]
    fn object_keeps_unknown_fields_ok() -> Result {
        // language=json
        let value = json!({
            "id": 42,
            "is_bot": false,
            "first_name": "Alice",
            "username": "alice",
            "has_new_shiny_field": {"nested": true}
        });
        let user: User = hydrate(value, Shape::Object)?;
        assert_eq!(user.id, 42);
        assert_eq!(user.first_name, "Alice");
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert_eq!(user.extra["has_new_shiny_field"], json!({"nested": true}));
        Ok(())
    }

    #[test]
    fn array_preserves_order_ok() -> Result {
        // language=json
        let value = json!([
            {"id": 1, "is_bot": false, "first_name": "A"},
            {"id": 2, "is_bot": true, "first_name": "B"}
        ]);
        let users: Vec<User> = hydrate(value, Shape::Array)?;
        let ids: Vec<_> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids, [1, 2]);
        Ok(())
    }

    #[test]
    fn union_bool_ok() -> Result {
        let result: ObjectOrBool<Message> = hydrate(json!(true), Shape::ObjectOrBool)?;
        assert_eq!(result, ObjectOrBool::Bool(true));
        assert!(result.is_bool());
        Ok(())
    }

    #[test]
    fn union_object_ok() -> Result {
        let result: ObjectOrBool<Message> = hydrate(json!({"message_id": 5}), Shape::ObjectOrBool)?;
        assert!(result.is_object());
        assert_eq!(result.into_object().map(|message| message.message_id), Some(5));
        Ok(())
    }

    #[test]
    fn union_rejects_other_types() {
        let result: crate::Result<ObjectOrBool<Message>> =
            hydrate(json!("edited"), Shape::ObjectOrBool);
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn shape_mismatch_is_malformed() {
        let result: crate::Result<User> = hydrate(json!(true), Shape::Object);
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn scalar_ok() -> Result {
        let count: i64 = hydrate(json!(17), Shape::Scalar)?;
        assert_eq!(count, 17);
        Ok(())
    }
}
