use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::effects::ripple::{RippleConfig, ripple_pixel};
use crate::foundation::core::{ImageSize, Rgba8};
use crate::foundation::error::{RippleError, RippleResult};

#[derive(Clone, Debug)]
/// Scheduling controls for a whole-image pass.
pub struct PassOpts {
    /// Run row chunks on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
    /// Rows handed to a worker at a time. `0` is treated as `1`.
    pub rows_per_chunk: usize,
}

impl Default for PassOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            rows_per_chunk: 16,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters reported by a pass.
pub struct PassStats {
    /// Rows in the image.
    pub rows_total: u32,
    /// Rows whose output was written.
    pub rows_rendered: u32,
    /// `true` when the pass stopped early because cancellation was requested.
    pub cancelled: bool,
}

/// Shade `src` into `dst`. Both buffers are tightly packed RGBA8 of `size`.
pub fn apply_ripple(
    src: &[u8],
    dst: &mut [u8],
    size: ImageSize,
    config: &RippleConfig,
    opts: &PassOpts,
) -> RippleResult<PassStats> {
    apply_ripple_cancellable(src, dst, size, config, opts, &AtomicBool::new(false))
}

/// Like [`apply_ripple`], but stops issuing row chunks once `cancel` is set.
///
/// Rows finished before cancellation keep their shaded values; the rest of `dst` is left as
/// the caller supplied it.
#[tracing::instrument(
    skip(src, dst, size, opts, cancel),
    fields(width = size.width, height = size.height)
)]
pub fn apply_ripple_cancellable(
    src: &[u8],
    dst: &mut [u8],
    size: ImageSize,
    config: &RippleConfig,
    opts: &PassOpts,
    cancel: &AtomicBool,
) -> RippleResult<PassStats> {
    let expected_len = size.rgba8_len()?;
    if src.len() != expected_len || dst.len() != expected_len {
        return Err(RippleError::evaluation(
            "apply_ripple expects src and dst matching width*height*4",
        ));
    }

    let stats = run_rows(size, opts, cancel, dst, |y, row_out| {
        let start = y as usize * row_out.len();
        let row_in = &src[start..start + row_out.len()];
        shade_row(config, y, row_in, row_out);
    })?;
    log_stats(&stats);
    Ok(stats)
}

/// Shade `buf` in place. Produces the same pixels as [`apply_ripple`].
#[tracing::instrument(
    skip(buf, size, opts),
    fields(width = size.width, height = size.height)
)]
pub fn apply_ripple_in_place(
    buf: &mut [u8],
    size: ImageSize,
    config: &RippleConfig,
    opts: &PassOpts,
) -> RippleResult<PassStats> {
    let expected_len = size.rgba8_len()?;
    if buf.len() != expected_len {
        return Err(RippleError::evaluation(
            "apply_ripple_in_place expects buf matching width*height*4",
        ));
    }

    let stats = run_rows(size, opts, &AtomicBool::new(false), buf, |y, row| {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let input = Rgba8::from_array([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&ripple_pixel(config, input, x as u32, y).to_array());
        }
    })?;
    log_stats(&stats);
    Ok(stats)
}

/// Shade an [`image::RgbaImage`] into a new image of the same dimensions.
pub fn ripple_image(
    input: &image::RgbaImage,
    config: &RippleConfig,
    opts: &PassOpts,
) -> RippleResult<image::RgbaImage> {
    let size = ImageSize::new(input.width(), input.height());
    let mut out = vec![0u8; size.rgba8_len()?];
    apply_ripple(input.as_raw(), &mut out, size, config, opts)?;
    image::RgbaImage::from_raw(size.width, size.height, out)
        .ok_or_else(|| RippleError::evaluation("output buffer does not match image dimensions"))
}

fn shade_row(config: &RippleConfig, y: u32, row_in: &[u8], row_out: &mut [u8]) {
    for (x, (s, d)) in row_in
        .chunks_exact(4)
        .zip(row_out.chunks_exact_mut(4))
        .enumerate()
    {
        let input = Rgba8::from_array([s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&ripple_pixel(config, input, x as u32, y).to_array());
    }
}

/// Split `dst` into row chunks and run `shade(y, row)` over every row.
///
/// Chunks own disjoint rows, so workers never share output slots.
fn run_rows<F>(
    size: ImageSize,
    opts: &PassOpts,
    cancel: &AtomicBool,
    dst: &mut [u8],
    shade: F,
) -> RippleResult<PassStats>
where
    F: Fn(u32, &mut [u8]) + Sync,
{
    let mut stats = PassStats {
        rows_total: size.height,
        ..PassStats::default()
    };
    if size.width == 0 || size.height == 0 {
        return Ok(stats);
    }

    let stride = size.row_stride()?;
    let rows_per_chunk = normalized_rows_per_chunk(opts.rows_per_chunk);
    let chunk_len = stride
        .checked_mul(rows_per_chunk)
        .ok_or_else(|| RippleError::evaluation("row chunk size overflow"))?;

    let run_chunk = |chunk_idx: usize, chunk: &mut [u8]| -> u32 {
        if cancel.load(Ordering::Relaxed) {
            return 0;
        }
        let first_row = chunk_idx * rows_per_chunk;
        let mut rows = 0u32;
        for (i, row) in chunk.chunks_exact_mut(stride).enumerate() {
            shade((first_row + i) as u32, row);
            rows += 1;
        }
        rows
    };

    stats.rows_rendered = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            dst.par_chunks_mut(chunk_len)
                .enumerate()
                .map(|(i, chunk)| run_chunk(i, chunk))
                .sum()
        })
    } else {
        dst.chunks_mut(chunk_len)
            .enumerate()
            .map(|(i, chunk)| run_chunk(i, chunk))
            .sum()
    };
    stats.cancelled = stats.rows_rendered < stats.rows_total;
    Ok(stats)
}

fn log_stats(stats: &PassStats) {
    if stats.cancelled {
        tracing::warn!(
            rows_rendered = stats.rows_rendered,
            rows_total = stats.rows_total,
            "ripple pass cancelled"
        );
    } else {
        tracing::debug!(rows = stats.rows_total, "ripple pass complete");
    }
}

fn build_thread_pool(threads: Option<usize>) -> RippleResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RippleError::validation(
            "pass threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RippleError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_rows_per_chunk(rows_per_chunk: usize) -> usize {
    if rows_per_chunk == 0 {
        1
    } else {
        rows_per_chunk
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pass.rs"]
mod tests;
