//! Sapling Core Types
//!
//! This crate provides the foundational types shared by the Sapling tree
//! layout crates. It currently holds:
//!
//! - **Geometry**: Points and bounding rectangles ([`geometry`] module)

pub mod geometry;
