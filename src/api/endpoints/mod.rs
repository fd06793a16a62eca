//! API endpoint handlers.
//!
//! Each module serves one portal collaborator. Handlers only translate
//! JSON to and from the extraction modules.

pub mod documents;
pub mod extract;
pub mod health;
pub mod intake;
pub mod visits;
