//! Integration test crate for Framescope.
//!
//! Holds cross-crate tests that drive the scening dialog against shared
//! scening lists the way the host does.

#[cfg(test)]
mod dialog;
