pub mod password_generator;
pub mod password_policy;
pub mod password_service;
pub mod random_source;
