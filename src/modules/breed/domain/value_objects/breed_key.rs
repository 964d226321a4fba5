use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique aggregation key: a breed name optionally combined with a sub-breed
/// name. Displays as `"breed"` or `"breed subbreed"`.
///
/// Names are trimmed and lowercased on construction to match the form the
/// remote API returns them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BreedKey {
    breed: String,
    sub_breed: Option<String>,
}

impl BreedKey {
    pub fn breed(name: &str) -> Self {
        Self {
            breed: normalize(name),
            sub_breed: None,
        }
    }

    pub fn with_sub(breed: &str, sub_breed: &str) -> Self {
        let sub = normalize(sub_breed);
        Self {
            breed: normalize(breed),
            sub_breed: if sub.is_empty() { None } else { Some(sub) },
        }
    }

    pub fn breed_name(&self) -> &str {
        &self.breed
    }

    pub fn sub_breed(&self) -> Option<&str> {
        self.sub_breed.as_deref()
    }

    pub fn is_sub_breed(&self) -> bool {
        self.sub_breed.is_some()
    }
}

impl fmt::Display for BreedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_breed {
            Some(sub) => write!(f, "{} {}", self.breed, sub),
            None => write!(f, "{}", self.breed),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
