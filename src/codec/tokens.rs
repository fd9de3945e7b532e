// BSL 1.0 License

//! Whitespace tokenizer shared by the header and ASCII payload parsers.

/// Splits a byte slice into whitespace separated tokens.
///
/// A `#` at the start of a token begins a comment that runs to the end of
/// the line.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    bytes: &'a [u8],
    posn: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, posn: 0 }
    }

    /// The bytes not yet consumed.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.bytes[self.posn..]
    }

    fn skip_blanks(&mut self) {
        while let Some(&byte) = self.bytes.get(self.posn) {
            if byte.is_ascii_whitespace() {
                self.posn += 1;
            } else if byte == b'#' {
                // skip the comment, leaving the newline to the loop
                while self.bytes.get(self.posn).map_or(false, |&b| b != b'\n') {
                    self.posn += 1;
                }
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_blanks();
        let start = self.posn;
        while self
            .bytes
            .get(self.posn)
            .map_or(false, |b| !b.is_ascii_whitespace())
        {
            self.posn += 1;
        }

        (self.posn > start).then(|| &self.bytes[start..self.posn])
    }
}

/// Lossy text of a token, for error messages.
pub(crate) fn text(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}
