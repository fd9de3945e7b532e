// BSL 1.0 License

//! Bit packing for binary bitmaps: one bit per pixel, most significant bit
//! first, every row padded out to a whole byte.

/// Number of bytes one packed row of `width` pixels occupies.
pub(crate) const fn bytes_per_row(width: usize) -> usize {
    width / 8 + (width % 8 != 0) as usize
}

/// Pack one row of pixels, appending the bytes to `out`.
pub(crate) fn pack_row(row: impl IntoIterator<Item = bool>, out: &mut Vec<u8>) {
    let mut byte = 0u8;
    let mut used = 0;
    for set in row {
        if set {
            byte |= 0x80 >> used;
        }
        used += 1;
        if used == 8 {
            out.push(byte);
            byte = 0;
            used = 0;
        }
    }

    // pad the last partial byte with zeroes
    if used > 0 {
        out.push(byte);
    }
}

/// Unpack `width` pixels from the start of `bytes`.
///
/// `bytes` must hold at least [`bytes_per_row(width)`](bytes_per_row) bytes.
pub(crate) fn unpack_row(bytes: &[u8], width: usize) -> impl Iterator<Item = bool> + '_ {
    (0..width).map(move |x| bytes[x / 8] & (0x80 >> (x % 8)) != 0)
}
