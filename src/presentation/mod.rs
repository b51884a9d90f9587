/// Account and user profiles
pub mod account;
/// Dialogs and conversation messages
pub mod dialog;
/// Projects, categories and offer quota
pub mod project;
/// Lenient deserializers for loosely typed fields
pub mod serialization;
