//! Wire contracts shared between the deals client and the remote deals service.

pub mod domain;
pub mod usecases;
