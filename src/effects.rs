// ============================================================================
// EFFECTS ENGINE — rayon-parallelized sepia / contrast / curvature pipeline
// ============================================================================
//
// One pure function: (original raster, slider params) -> output raster.
// Every render reads only the immutable original and writes a freshly
// allocated output, so repeated renders never compound error and rows can be
// partitioned across threads with no shared mutable state.
// ============================================================================

use rayon::prelude::*;

use crate::params::{Coefficients, EffectParams};
use crate::raster::{Raster, quantize};

/// Renders the full effects pipeline over `original`.
///
/// Per destination pixel: normalize coordinates to [-1, 1]², apply the
/// inverse-radial warp to find the source pixel, sample the original's red
/// channel as a stand-in luminance, contrast-remap it, sepia-tone it, and
/// blend the two by the sepia intensity. Warp samples that land outside the
/// original leave the destination pixel at its transparent initialization,
/// which shows up as a dark border at extreme curvature.
///
/// The green/blue channels of the source are deliberately ignored; changing
/// that would change every observable output.
///
/// A zero-sized original yields a zero-sized output rather than an error.
pub fn render(original: &Raster, params: &EffectParams) -> Raster {
    let w = original.width() as usize;
    let h = original.height() as usize;
    if w == 0 || h == 0 {
        return Raster::new(original.width(), original.height());
    }

    let co = Coefficients::from_params(params);
    let src = original.as_raw();
    let stride = w * 4;
    let mut dst = vec![0u8; w * h * 4];

    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row_out)| {
            let ny = (y as f32 / h as f32) * 2.0 - 1.0;
            for x in 0..w {
                let nx = (x as f32 / w as f32) * 2.0 - 1.0;

                let dist = (nx * nx + ny * ny).sqrt();
                let factor = 1.0 / (1.0 + co.curvature_strength * dist);

                let source_x = (((nx * factor + 1.0) * w as f32) / 2.0).floor();
                let source_y = (((ny * factor + 1.0) * h as f32) / 2.0).floor();

                // Positive check so non-finite coordinates also skip.
                if !(source_x >= 0.0
                    && source_x < w as f32
                    && source_y >= 0.0
                    && source_y < h as f32)
                {
                    continue;
                }
                let si = (source_y as usize * w + source_x as usize) * 4;

                // Red channel stands in for luminance; green/blue of the
                // source pixel are ignored.
                let lum = src[si] as f32;
                let base = co.contrast_factor * (lum - 128.0) + 128.0;
                let (r, g, b) = (base, base, base);

                let tr = 0.393 * r + 0.769 * g + 0.189 * b;
                let tg = 0.349 * r + 0.686 * g + 0.168 * b;
                let tb = 0.272 * r + 0.534 * g + 0.131 * b;

                let s = co.sepia_intensity;
                let pi = x * 4;
                row_out[pi] = quantize(r * (1.0 - s) + tr * s);
                row_out[pi + 1] = quantize(g * (1.0 - s) + tg * s);
                row_out[pi + 2] = quantize(b * (1.0 - s) + tb * s);
                row_out[pi + 3] = 255;
            }
        });

    Raster::from_raw(original.width(), original.height(), dst)
}
