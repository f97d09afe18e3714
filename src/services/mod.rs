//! Business logic on top of the infrastructure handles.

pub mod deployment;
