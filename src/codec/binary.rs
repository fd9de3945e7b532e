// BSL 1.0 License

use super::{bits, Header};
use crate::{Family, FormatError, Image, Pixel};

/// Read the binary payload that follows the header tokens.
///
/// Bitmaps are read from just after the separator. Gray and color payloads
/// are taken from the *end* of the input, so any bytes between the header
/// and the last `sample_count()` bytes are skipped. Files with data after
/// the pixels are therefore misread; existing files rely on the lenient
/// separator handling, so this is kept.
pub(super) fn read(rest: &[u8], header: &Header) -> Result<Vec<u8>, FormatError> {
    // a single whitespace byte ends the header
    let payload = match rest.split_first() {
        Some((separator, payload)) if separator.is_ascii_whitespace() => payload,
        _ => rest,
    };

    match header.magic.family() {
        Family::Bitmap => read_bits(payload, header),
        Family::Graymap | Family::Pixmap => read_tail(payload, header),
    }
}

fn read_bits(payload: &[u8], header: &Header) -> Result<Vec<u8>, FormatError> {
    let row_bytes = bits::bytes_per_row(header.width);
    let needed = row_bytes.saturating_mul(header.height);
    let payload = payload.get(..needed).ok_or(FormatError::Truncated {
        expected: needed,
        found: payload.len(),
        unit: "bytes",
    })?;

    // never reserve more than the payload can hold
    let capacity = header.sample_count()?.min(payload.len().saturating_mul(8));
    let mut samples = Vec::with_capacity(capacity);
    if row_bytes > 0 {
        for row in payload.chunks_exact(row_bytes) {
            samples.extend(bits::unpack_row(row, header.width).map(u8::from));
        }
    }
    Ok(samples)
}

fn read_tail(payload: &[u8], header: &Header) -> Result<Vec<u8>, FormatError> {
    let needed = header.sample_count()?;
    let skipped = payload
        .len()
        .checked_sub(needed)
        .ok_or(FormatError::Truncated {
            expected: needed,
            found: payload.len(),
            unit: "bytes",
        })?;

    if skipped > 0 {
        log::debug!(
            "skipping {} bytes between the {} header and its payload",
            skipped,
            header.magic
        );
    }
    Ok(payload[skipped..].to_vec())
}

/// Write packed bits for bitmaps and raw samples otherwise.
pub(super) fn write<P: Pixel>(image: &Image<P>, out: &mut Vec<u8>) {
    match P::FAMILY {
        Family::Bitmap => {
            for row in image.grid.rows() {
                bits::pack_row(row.iter().map(|pixel| pixel.samples()[0] != 0), out);
            }
        }
        Family::Graymap | Family::Pixmap => P::extend_samples(image.grid.pixels(), out),
    }
}
