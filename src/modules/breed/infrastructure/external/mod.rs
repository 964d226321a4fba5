pub mod dog_api;
pub mod http;

pub use dog_api::DogApiClient;
