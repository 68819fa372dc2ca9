//! Contour threshold policy.
//!
//! Contour lines are generated on the fly from the elevation raster. Which
//! lines are drawn depends on the zoom: each [`ThresholdBand`] declares the
//! line spacings (meters) that become active at its zoom floor, and stays
//! active until the next band's floor.
//!
//! ```text
//!   zoom:   0 ........ 11 | 12 ...... 13 | 14 ............ ∞
//!   lines:  (none)        | 100, 500     | 20, 100
//! ```
//!
//! The policy is validated once at startup and encoded into a
//! [`ContourTemplate`], the vector source URL handed to the contour
//! generator. The template carries the whole table so the generator picks
//! levels per requested tile zoom.
//!
//! # Example
//!
//! ```
//! use terrainview::contour::{build_template, ContourFields, ThresholdBand};
//!
//! let bands = vec![
//!     ThresholdBand::new(12, vec![100, 500]),
//!     ThresholdBand::new(14, vec![20, 100]),
//! ];
//! let template = build_template(bands, ContourFields::default()).unwrap();
//! assert!(template.as_str().ends_with("thresholds=12*100*500~14*20*100"));
//! ```

mod error;
mod fields;
mod policy;
mod template;

pub use error::PolicyError;
pub use fields::ContourFields;
pub use policy::{ContourLevels, ContourPolicy, ThresholdBand};
pub use template::{build_template, ContourTemplate, DEFAULT_PROTOCOL_ID};
