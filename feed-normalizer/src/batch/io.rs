//! JSON reading and writing for the command-line tool.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use super::{FeedBatch, FeedIoError, NormalizedFeed};

/// Read a feed batch from a JSON file.
pub fn load_feed(path: &Path) -> Result<FeedBatch, FeedIoError> {
    let file = File::open(path)?;
    read_feed(BufReader::new(file))
}

pub fn read_feed<R: Read>(reader: R) -> Result<FeedBatch, FeedIoError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write the normalized feed as pretty-printed JSON, newline terminated.
pub fn write_feed<W: Write>(mut writer: W, feed: &NormalizedFeed) -> Result<(), FeedIoError> {
    serde_json::to_writer_pretty(&mut writer, feed)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
