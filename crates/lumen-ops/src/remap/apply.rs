//! Table lookup over sample buffers.

use super::mapping::TransferTable;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Samples handed to one worker when the `parallel` feature is enabled.
pub const PARALLEL_CHUNK: usize = 1 << 14;

/// Maps every sample through `table` into a new buffer.
///
/// With the `parallel` feature the buffer is split into chunks of
/// [`PARALLEL_CHUNK`] samples processed on the rayon pool; the result is
/// identical to the sequential path.
pub fn apply_table(samples: &[u8], table: &TransferTable) -> Vec<u8> {
    let mut out = vec![0u8; samples.len()];

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(PARALLEL_CHUNK)
        .zip(samples.par_chunks(PARALLEL_CHUNK))
        .for_each(|(dst, src)| lookup(src, dst, table));

    #[cfg(not(feature = "parallel"))]
    lookup(samples, &mut out, table);

    out
}

#[inline]
fn lookup(src: &[u8], dst: &mut [u8], table: &TransferTable) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = table.get(s);
    }
}
