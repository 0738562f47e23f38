use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn file_reader<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

pub fn file_writer<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Reads a whole file to text.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut text = String::new();
    file_reader(path)?.read_to_string(&mut text)?;
    Ok(text)
}

/// Writes text as the whole contents of a file.
pub fn write_string<P: AsRef<Path>>(path: P, text: &str) -> io::Result<()> {
    let mut writer = file_writer(path)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
