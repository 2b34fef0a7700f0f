use serde_json::{Map, Value};

pub const ID: &str = "id";
pub const DELIVER_TO: &str = "deliverTo";
pub const MOBILE_NUMBER: &str = "mobileNumber";
pub const DISHES: &str = "dishes";
pub const STATUS: &str = "status";

/// Order fields submitted under a request body's `data` key.
///
/// Nothing is required at this level; the check lists decide what must be
/// present. A body without a `data` object reads as an empty payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPayload {
    fields: Map<String, Value>,
}

impl OrderPayload {
    pub fn from_body(body: &Value) -> Self {
        match body.get("data") {
            Some(Value::Object(fields)) => Self {
                fields: fields.clone(),
            },
            _ => Self::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Text of a truthy field. Non-string scalars (a mobile number sent as a
    /// JSON number, say) come back as their JSON text.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            value if is_truthy(value) => Some(value.to_string()),
            _ => None,
        }
    }

    /// Order id embedded in the body, if one was supplied.
    pub fn id(&self) -> Option<String> {
        self.text(ID)
    }
}

/// Whether a JSON value counts as "supplied": null, false, zero and the empty
/// string do not; arrays and objects always do, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
