//! Bot API endpoints, one method per remote operation, grouped like the Bot API reference.
//!
//! Each endpoint is a constant [`crate::method::Method`] table plus a thin method on
//! [`crate::Bot`] taking the required parameters positionally and an open bag of optional ones.

pub mod chat;
pub mod editing;
pub mod forum;
pub mod games;
pub mod inline;
pub mod messages;
pub mod payments;
pub mod settings;
pub mod stickers;
pub mod updates;
