//! Photo effects core: sepia, contrast, and a radial "curvature" lens warp
//! applied per pixel over an RGBA raster.
//!
//! The heart of the crate is [`render`], a pure function from an immutable
//! original raster plus a slider parameter bag to a freshly allocated output
//! raster. Hosts cache the decoded original once per image load and
//! re-render the whole frame on every slider change — [`Editor`] wraps that
//! lifecycle. The [`io`] module bridges encoded images (files or upload
//! buffers) to rasters and back out to PNG.
//!
//! # Example
//!
//! ```
//! use lensfe::{EffectParams, Raster, render};
//!
//! let original = Raster::new(4, 4);
//! let params = EffectParams::new(40.0, 25.0, 10.0);
//! let output = render(&original, &params);
//! assert_eq!(output.dimensions(), original.dimensions());
//! ```

pub mod editor;
pub mod effects;
pub mod io;
pub mod params;
pub mod raster;

pub use editor::Editor;
pub use effects::render;
pub use io::LensError;
pub use params::{Coefficients, EffectParams};
pub use raster::Raster;
