use crate::utils::error::StoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Raw create-person body. Values are kept exactly as received so the
/// response can echo them back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

impl PersonInput {
    /// Picks `name` and `age` out of a decoded body; other fields are ignored.
    pub fn from_object(fields: &Map<String, Value>) -> Self {
        Self {
            name: fields.get("name").cloned(),
            age: fields.get("age").cloned(),
        }
    }
}

/// Numeric age. Integral values serialize as integers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Age(pub f64);

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Age)
    }
}

/// A person after the schema cast, ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl Person {
    /// Applies the `{name: String, age: Number}` schema to raw input.
    pub fn cast(input: &PersonInput) -> Result<Self, StoreError> {
        Ok(Self {
            name: cast_string("name", input.name.as_ref())?,
            age: cast_number("age", input.age.as_ref())?,
        })
    }
}

/// A person document exactly as the store holds it, including any fields
/// written by other clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredPerson(pub Map<String, Value>);

impl StoredPerson {
    /// Document for a freshly inserted person: `{_id, name?, age?, __v: 0}`.
    pub fn new(id: String, person: Person) -> Self {
        let mut fields = Map::new();
        fields.insert("_id".to_string(), Value::String(id));
        if let Some(name) = person.name {
            fields.insert("name".to_string(), Value::String(name));
        }
        if let Some(age) = person.age {
            fields.insert("age".to_string(), serde_json::to_value(age).unwrap_or(Value::Null));
        }
        fields.insert("__v".to_string(), Value::from(0));
        Self(fields)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("_id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn age(&self) -> Option<&Value> {
        self.0.get("age")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

fn cast_error(path: &str, value: &Value, kind: &str) -> StoreError {
    let value = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    StoreError::Cast {
        path: path.to_string(),
        value,
        kind: kind.to_string(),
    }
}

fn cast_string(path: &str, value: Option<&Value>) -> Result<Option<String>, StoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(cast_error(path, other, "String")),
    }
}

fn cast_number(path: &str, value: Option<&Value>) -> Result<Option<Age>, StoreError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            // 空字串視為未提供
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<f64>().ok()
        }
        Some(_) => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(Some(Age(n))),
        _ => Err(cast_error(path, value.unwrap_or(&Value::Null), "Number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> PersonInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_cast_plain_values() {
        let person = Person::cast(&input(json!({"name": "Ada", "age": 36}))).unwrap();
        assert_eq!(person.name.as_deref(), Some("Ada"));
        assert_eq!(person.age, Some(Age(36.0)));
    }

    #[test]
    fn test_cast_coerces_like_schema() {
        let person = Person::cast(&input(json!({"name": 42, "age": " 36.5 "}))).unwrap();
        assert_eq!(person.name.as_deref(), Some("42"));
        assert_eq!(person.age, Some(Age(36.5)));

        let person = Person::cast(&input(json!({"name": true, "age": false}))).unwrap();
        assert_eq!(person.name.as_deref(), Some("true"));
        assert_eq!(person.age, Some(Age(0.0)));
    }

    #[test]
    fn test_cast_missing_and_empty_fields() {
        let person = Person::cast(&PersonInput::default()).unwrap();
        assert_eq!(person, Person::default());

        let person = Person::cast(&input(json!({"name": null, "age": ""}))).unwrap();
        assert_eq!(person, Person::default());
    }

    #[test]
    fn test_cast_rejects_non_numeric_age() {
        let err = Person::cast(&input(json!({"name": "Ada", "age": "abc"}))).unwrap_err();
        match err {
            StoreError::Cast { path, value, kind } => {
                assert_eq!(path, "age");
                assert_eq!(value, "abc");
                assert_eq!(kind, "Number");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(Person::cast(&input(json!({"age": "Infinity"}))).is_err());
        assert!(Person::cast(&input(json!({"name": ["a", "b"]}))).is_err());
        assert!(Person::cast(&input(json!({"age": {"years": 3}}))).is_err());
    }

    #[test]
    fn test_age_serializes_integral_values_as_integers() {
        assert_eq!(serde_json::to_value(Age(36.0)).unwrap(), json!(36));
        assert_eq!(serde_json::to_value(Age(36.5)).unwrap(), json!(36.5));
        assert_eq!(serde_json::to_value(Age(-2.0)).unwrap(), json!(-2));
    }

    #[test]
    fn test_stored_person_shape() {
        let stored = StoredPerson::new(
            "0123456789abcdef01234567".to_string(),
            Person {
                name: Some("Ada".to_string()),
                age: Some(Age(36.0)),
            },
        );

        assert_eq!(
            serde_json::to_value(&stored).unwrap(),
            json!({"_id": "0123456789abcdef01234567", "name": "Ada", "age": 36, "__v": 0})
        );
    }

    #[test]
    fn test_input_echo_omits_absent_fields() {
        let raw = input(json!({"name": "Ada"}));
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!({"name": "Ada"}));
    }

    #[test]
    fn test_stored_person_accessors() {
        let stored = StoredPerson::new("abc".to_string(), Person::default());
        assert_eq!(stored.id(), Some("abc"));
        assert_eq!(stored.name(), None);
        assert_eq!(stored.age(), None);
        assert_eq!(stored.get("__v"), Some(&json!(0)));
    }

    #[test]
    fn test_input_from_object_keeps_raw_values() {
        let body = json!({"name": "Ada", "age": "36", "role": "admin"});
        let raw = PersonInput::from_object(body.as_object().unwrap());

        assert_eq!(raw.name, Some(json!("Ada")));
        assert_eq!(raw.age, Some(json!("36")));
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!({"name": "Ada", "age": "36"}));
    }

    #[test]
    fn test_repeated_form_values_fail_cast() {
        let raw = PersonInput {
            name: Some(json!(["a", "b"])),
            age: None,
        };
        assert!(Person::cast(&raw).unwrap_err().is_rejection());
    }
}
