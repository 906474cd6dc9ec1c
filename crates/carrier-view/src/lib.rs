//! Turns shipment records plus a selection into what a map should draw.
//!
//! Everything in this crate is a pure function of its inputs. Callers are
//! expected to recompute the whole [`DisplayGeometry`] whenever the dataset or
//! the selection changes and hand it to a renderer as a fresh snapshot.

pub mod display;
pub mod geometry;
pub mod policy;
pub mod selector;

pub use display::{DisplayGeometry, LineStyle, Marker, MarkerRole, Polyline, Viewport};
pub use geometry::{compute_air_geometry, compute_sea_geometry, overview_marker};
pub use policy::ViewPolicy;
pub use selector::{resolve, ResolvedView, ViewMode};
