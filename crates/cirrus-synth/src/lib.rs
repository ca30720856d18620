//! # cirrus-synth
//!
//! Lowers the `cirrus-core` domain model into a CloudFormation-style
//! deployment manifest.
//!
//! Domain entities stay plain data; the adapter functions in [`lower`]
//! translate them into typed resource declarations ([`resource`]), a
//! [`stack::Stack`] collects declarations and stamps tags, and
//! [`template::Template`] serializes the result. [`deployment`] is the
//! composition root that wires the whole estate from configuration.
//!
//! Nothing here diffs or applies anything; the emitted manifest is handed to
//! the external deployment tool.

pub mod deployment;
pub mod error;
pub mod lower;
pub mod resource;
pub mod stack;
pub mod template;

pub use error::SynthError;
