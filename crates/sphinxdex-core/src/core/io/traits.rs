use super::raw::RawSearchIndex;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing a serialized search index.
///
/// Implementors handle one on-disk encoding of the same [`RawSearchIndex`] layout.
pub trait IndexFile {
    /// The error type for I/O and format failures.
    type Error: Error + From<io::Error>;

    /// Reads and parses a serialized index from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a well-formed index.
    fn read_from(reader: &mut impl Read) -> Result<RawSearchIndex, Self::Error>;

    /// Serializes an index to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(index: &RawSearchIndex, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a serialized index from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<RawSearchIndex, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a serialized index to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(index: &RawSearchIndex, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(index, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
