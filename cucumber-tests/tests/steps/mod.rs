pub mod date_steps;
pub mod entity_steps;
pub mod property_steps;
