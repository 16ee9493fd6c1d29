use std::fs::{self, File};
use std::io::{self, Read, ErrorKind};
use std::path::Path;
use encoding_rs::WINDOWS_1252;
use encoding_rs_io::DecodeReaderBytesBuilder;

/// Reads a text file as UTF-8, falling back to Windows-1252
/// for exports from older word processors.
pub fn load_text(path: &Path) -> io::Result<String> {
    if !path.is_file() {
        return Err(io::Error::new(ErrorKind::Other, format!("{} is not a file", path.display())));
    }
    match fs::read_to_string(path) {
        Ok(c) => Ok(c),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            log::debug!("{} is not UTF-8, decoding as Windows-1252", path.display());
            read_to_string_non_utf8_encoding(path)
        },
        Err(e) => Err(e),
    }
}

fn read_to_string_non_utf8_encoding(path: &Path) -> io::Result<String> {
    let source_file = File::open(path)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(WINDOWS_1252))
        .build(source_file);
    let mut dest = String::new();
    decoder.read_to_string(&mut dest)?;
    Ok(dest)
}
