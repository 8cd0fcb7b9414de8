//! Arbor Core Types
//!
//! This crate provides the foundational types shared by the Arbor layout
//! engine and its front ends. It includes:
//!
//! - **Identifiers**: Node identifiers in the merged domain/sub-domain id space ([`identifier::NodeId`])
//! - **Records**: The flat input records fed to the layout engine ([`record::DomainRecord`])
//! - **Geometry**: Points and bounding boxes in layout space ([`geometry`] module)
//! - **Direction**: Which axis carries tree depth ([`direction::Direction`])

pub mod direction;
pub mod geometry;
pub mod identifier;
pub mod record;
