pub mod autocomplete;
pub mod deploy;
pub mod deployments;
pub mod dev;
pub mod registry;
pub mod verify;
