//! # colorkit
//!
//! RGB color utilities: hex parsing and encoding, brightness comparison,
//! linear interpolation, and a bounded registry of recently used colors.
//!
//! ## Features
//!
//! - **Color**: immutable RGB value with clamped construction
//! - **Hex parsing**: `#RRGGBB`, `RRGGBB`, and the 3-digit shorthand
//! - **Algorithms**: `R-G-B` triple parsing, brightest-of-two, interpolation
//! - **Registry**: FIFO of the five most recent colors, safe to share across threads
//! - **serde** (optional): `Color` serializes as its hex string
//!
//! ## Quick Start
//!
//! ```rust
//! use colorkit::{algorithms, Color, ColorRegistry, Result};
//!
//! # fn main() -> Result<()> {
//! let start = Color::from_hex("#000")?;
//! let end: Color = "FFFFFF".parse()?;
//!
//! let ramp = algorithms::interpolate(start, end, 4)?;
//! assert_eq!(ramp[1].to_hex(), "#7f7f7f");
//!
//! let registry = ColorRegistry::new();
//! registry.push_color(algorithms::brightest(start, end));
//! assert_eq!(registry.list(), vec!["#ffffff"]);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod color;
pub mod error;
pub mod registry;

pub use color::Color;
pub use error::{ColorError, Result};
pub use registry::ColorRegistry;
