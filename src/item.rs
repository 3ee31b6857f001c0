// item.rs
use rocket::serde::{Deserialize, Serialize};

pub type ItemId = String;

/// A named record in the registry, keyed by its caller-supplied `id`.
///
/// Missing fields decode as empty strings, so `{}` is a valid (if unhelpful) item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
