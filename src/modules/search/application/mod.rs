pub mod search_controller;

pub use search_controller::BreedSearchController;
