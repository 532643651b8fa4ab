//! Analysis of fault skins: groups of seismic fault cells linked along dip
//! (above/below) and strike (left/right).
//!
//! A grower fills a [`FaultStore`] with [`FaultCell`]s, links them, and adds
//! them to skins. Each [`FaultSkin`] then decomposes its links into chains,
//! finds its centroid-nearest cell, and packs quads and polylines for display.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{FaultError, Result};
pub use topology::{CellId, FaultCell, FaultSkin, FaultStore, SkinId};
