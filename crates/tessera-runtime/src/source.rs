//! Line-oriented record source
//!
//! Each line of the source is one record: a node id and a logical
//! timestamp separated by whitespace. The parser is agnostic to the
//! underlying reader; end of input terminates the sequence.

use std::io::BufRead;

use tessera_core::{NodeId, TesseraError, TesseraResult, Timestamp};

/// Parse ordered (id, timestamp) records from a line-oriented reader
///
/// A record must split into exactly two integer fields, the first a
/// positive id. Line numbers in errors are 1-based.
pub fn parse_records<R: BufRead>(reader: R) -> TesseraResult<Vec<(NodeId, Timestamp)>> {
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(parse_line(number + 1, &line)?);
    }
    Ok(records)
}

/// Parse records from an in-memory string source
pub fn records_from_str(source: &str) -> TesseraResult<Vec<(NodeId, Timestamp)>> {
    parse_records(source.as_bytes())
}

fn parse_line(number: usize, line: &str) -> TesseraResult<(NodeId, Timestamp)> {
    let mut fields = line.split_whitespace();
    let id = fields.next().ok_or_else(|| malformed(number, line))?;
    let timestamp = fields.next().ok_or_else(|| malformed(number, line))?;
    if fields.next().is_some() {
        return Err(malformed(number, line));
    }

    let id: u64 = id.parse().map_err(|_| malformed(number, line))?;
    if id == 0 {
        return Err(malformed(number, line));
    }
    let timestamp: i64 = timestamp.parse().map_err(|_| malformed(number, line))?;

    Ok((NodeId::new(id), Timestamp::new(timestamp)))
}

fn malformed(number: usize, line: &str) -> TesseraError {
    tracing::warn!(line = number, "malformed record");
    TesseraError::MalformedRecord {
        line: number,
        content: line.to_string(),
    }
}
