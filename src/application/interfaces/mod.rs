/// Account service interface
pub mod account;
/// Message service interface
pub mod message;
/// Project exchange service interface
pub mod project;
