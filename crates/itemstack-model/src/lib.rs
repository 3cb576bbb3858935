//! Model types for ItemStack.
//!
//! This crate holds the wire-level types shared by the HTTP layer and the
//! business logic:
//!
//! - [`Item`] and [`Details`]: the single managed resource
//! - [`ErrorBody`]: the JSON body of every failure response

pub mod error;
pub mod item;

pub use error::ErrorBody;
pub use item::{Details, Item};
