//! Domain value objects and types.
//!
//! This module contains the phone number rules, the canonical
//! [`PhoneNumber`] value object, and the [`Session`] record that the
//! session store holds.

pub mod phone;
pub mod session;

pub use phone::PhoneNumber;
pub use session::{Session, SessionState};
