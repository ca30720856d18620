//! # cirrus-core
//!
//! Domain model for Cirrus.
//!
//! This crate holds the plain data types that describe a multi-account cloud
//! estate and its identity-access configuration:
//! - The organization containment tree (organization, organizational units,
//!   accounts) with name-keyed builder methods
//! - Permission sets, principals, targets, and assignments
//! - IAM policy references and inline policy documents
//! - Closed wire-string enums (feature set, session duration, principal and
//!   target kinds)
//!
//! Nothing here talks to a provider or performs validation; entities are
//! built once and handed to `cirrus-synth` for lowering into a deployment
//! manifest.

pub mod enums;
pub mod org;
pub mod policy;
pub mod presets;
pub mod sso;
