use serde::{Deserialize, Serialize};

/// A dog breed as listed by the remote API: a name and its sub-breeds
/// (possibly none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    pub sub_breeds: Vec<String>,
}

impl Breed {
    pub fn new(name: impl Into<String>, sub_breeds: Vec<String>) -> Self {
        Self {
            name: name.into().trim().to_lowercase(),
            sub_breeds: sub_breeds
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn has_sub_breeds(&self) -> bool {
        !self.sub_breeds.is_empty()
    }
}
