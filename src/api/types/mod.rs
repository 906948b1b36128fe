//! Request and response payloads for the Lending Club REST API.
//!
//! Field names on the wire are the API's camelCase names; Rust field names
//! are reworded where the abbreviations are opaque.

pub mod account;
pub mod funds;
pub mod loan;
pub mod note;
pub mod order;
pub mod portfolio;

pub use account::*;
pub use funds::*;
pub use loan::*;
pub use note::*;
pub use order::*;
pub use portfolio::*;
