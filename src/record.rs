//! Person records and the profession merge

use serde::{Deserialize, Serialize};

/// Profession attached by [`attach_profession`]
pub const DEFAULT_PROFESSION: &str = "Web dev";

/// Base person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

/// Person record extended with a profession
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub name: String,
    pub age: u32,
    pub profession: String,
}

impl Person {
    pub fn new<S: Into<String>>(name: S, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Build a [`Professional`] from `base`, with the profession set to
/// [`DEFAULT_PROFESSION`]
pub fn attach_profession(base: &Person) -> Professional {
    Professional {
        name: base.name.clone(),
        age: base.age,
        profession: DEFAULT_PROFESSION.to_string(),
    }
}
