// BSL 1.0 License

//! `std::io` and filesystem wrappers around the in-memory codec.

use crate::{AnyImage, Image, Pixel, Result};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn write_all(mut writer: impl Write, bytes: &[u8]) -> Result<()> {
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

impl<P: Pixel> Image<P> {
    /// Read the whole stream, then decode it.
    pub fn read_from(reader: impl Read) -> Result<Self> {
        Ok(Self::decode(&read_all(reader)?)?)
    }

    /// Encode the image and write it out in one go.
    ///
    /// Nothing is cleaned up if the write fails halfway.
    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        write_all(writer, &self.encode())
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {}", path.display());
        Self::read_from(File::open(path)?)
    }

    /// Write the image to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!("saving {} to {}", self.magic(), path.display());
        self.write_to(File::create(path)?)
    }
}

impl AnyImage {
    pub fn read_from(reader: impl Read) -> Result<Self> {
        Ok(Self::decode(&read_all(reader)?)?)
    }

    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        write_all(writer, &self.encode())
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {}", path.display());
        Self::read_from(File::open(path)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!("saving {} to {}", self.magic(), path.display());
        self.write_to(File::create(path)?)
    }
}
