use serde::Serialize;

/// Input of the `pinThing` mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinThingInput {
    pub name: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

/// Input of the `pinPerson` mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinPersonInput {
    pub identifier: String,
    pub name: String,
    pub description: String,
    pub email: String,
    pub image: String,
    pub url: String,
}
