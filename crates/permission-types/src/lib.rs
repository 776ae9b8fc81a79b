//! Permission Types - Core types for the profile permission service
//!
//! A profile is a named bag of string parameters. By convention the
//! parameters are permission flags such as `CanEdit` and `CanDelete`
//! holding `"true"` or `"false"`, but values are never type-checked.
//!
//! ## Key Concepts
//!
//! - **Profile**: a named set of parameters, keyed by its case-sensitive name
//! - **PermissionAction**: the closed set of actions a permission check accepts
//! - **PermissionCheck**: the outcome of checking one action on one profile

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod action;
pub mod profile;

pub use action::{ActionError, PermissionAction, PermissionCheck};
pub use profile::{seed_profiles, toggle_flag, Profile, FLAG_FALSE, FLAG_TRUE};
