//! schema.org JSON-LD documents pinned as atom metadata.

use serde_json::{json, Map, Value};

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// A document with a schema.org `@type`.
pub trait SchemaDocument {
    const TYPE: &'static str;

    /// Type specific members, without `@context` and `@type`.
    fn members(&self) -> Map<String, Value>;

    /// The full JSON-LD document.
    fn to_json(&self) -> Value {
        let mut document = Map::new();
        document.insert("@context".to_string(), json!(SCHEMA_ORG_CONTEXT));
        document.insert("@type".to_string(), json!(Self::TYPE));
        document.extend(self.members());
        Value::Object(document)
    }
}

fn insert_opt(members: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        members.insert(key.to_string(), json!(value));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thing {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl Thing {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl SchemaDocument for Thing {
    const TYPE: &'static str = "Thing";

    fn members(&self) -> Map<String, Value> {
        let mut members = Map::new();
        members.insert("name".to_string(), json!(self.name));
        insert_opt(&mut members, "description", &self.description);
        insert_opt(&mut members, "image", &self.image);
        insert_opt(&mut members, "url", &self.url);
        members
    }
}

/// A person, identified by an account address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub identifier: String,
    pub name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl SchemaDocument for Person {
    const TYPE: &'static str = "Person";

    fn members(&self) -> Map<String, Value> {
        let mut members = Map::new();
        members.insert("identifier".to_string(), json!(self.identifier));
        members.insert("name".to_string(), json!(self.name));
        insert_opt(&mut members, "description", &self.description);
        insert_opt(&mut members, "email", &self.email);
        insert_opt(&mut members, "image", &self.image);
        insert_opt(&mut members, "url", &self.url);
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thing_document() {
        let thing = Thing::named("Foo")
            .with_description("Lorem ipsum")
            .with_image("https://example.com/cat.png")
            .with_url("https://example.com");

        assert_eq!(
            thing.to_json(),
            json!({
                "@context": "https://schema.org",
                "@type": "Thing",
                "name": "Foo",
                "description": "Lorem ipsum",
                "image": "https://example.com/cat.png",
                "url": "https://example.com",
            })
        );
    }

    #[test]
    fn test_thing_omits_missing_members() {
        let document = Thing::named("Example Domain").to_json();
        let object = document.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("url"));
    }

    #[test]
    fn test_person_document() {
        let person = Person {
            identifier: "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string(),
            name: "Alice".to_string(),
            email: Some("alice@intuition.systems".to_string()),
            ..Person::default()
        };

        let document = person.to_json();
        assert_eq!(document["@type"], "Person");
        assert_eq!(document["@context"], SCHEMA_ORG_CONTEXT);
        assert_eq!(document["identifier"], "0x70997970c51812dc3a010c7d01b50e0d17dc79c8");
        assert_eq!(document["email"], "alice@intuition.systems");
        assert!(document.get("description").is_none());
    }
}
