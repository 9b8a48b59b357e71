pub mod dto;
pub mod read_models;
pub mod use_cases;
