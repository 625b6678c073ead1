pub mod audit_service;
pub mod prefix_generator;
pub mod presence_checker;
pub mod reporter;
