// BSL 1.0 License

use super::{
    tokens::{text, Tokens},
    Header,
};
use crate::{Family, FormatError, Image, Pixel};

/// Read exactly `header.sample_count()` decimal samples.
pub(super) fn read(mut tokens: Tokens<'_>, header: &Header) -> Result<Vec<u8>, FormatError> {
    let needed = header.sample_count()?;
    let parse: fn(&[u8]) -> Result<u8, FormatError> = match header.magic.family() {
        Family::Bitmap => parse_bit,
        Family::Graymap | Family::Pixmap => parse_sample,
    };

    // every token takes at least two bytes, so the input bounds the size
    let mut samples = Vec::with_capacity(needed.min(tokens.rest().len() / 2 + 1));
    for token in tokens.by_ref().take(needed) {
        samples.push(parse(token)?);
    }

    if samples.len() < needed {
        return Err(FormatError::Truncated {
            expected: needed,
            found: samples.len(),
            unit: "samples",
        });
    }

    match tokens.count() {
        0 => Ok(samples),
        trailing => Err(FormatError::TrailingSamples(trailing)),
    }
}

fn parse_bit(token: &[u8]) -> Result<u8, FormatError> {
    match token {
        b"0" => Ok(0),
        b"1" => Ok(1),
        _ => Err(FormatError::InvalidBit(text(token))),
    }
}

fn parse_sample(token: &[u8]) -> Result<u8, FormatError> {
    core::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FormatError::InvalidSample(text(token)))
}

/// Write every sample followed by a space, ending each row with a newline.
pub(super) fn write<P: Pixel>(image: &Image<P>, out: &mut Vec<u8>) {
    for row in image.grid.rows() {
        for &pixel in row {
            for sample in pixel.samples() {
                push_sample(out, sample);
            }
        }
        out.push(b'\n');
    }
}

fn push_sample(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + value / 10 % 10);
    }
    out.push(b'0' + value % 10);
    out.push(b' ');
}
