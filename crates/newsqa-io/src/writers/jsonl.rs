//! Streaming NDJSON writer for canonical records.
//!
//! One object per line: the record's own fields plus its `id`.

use std::io::{BufWriter, Write};

use serde::Serialize;

use newsqa_core::id::RecordId;
use newsqa_core::record::Record;

use crate::error::Result;

#[derive(Serialize)]
struct Line<'a> {
    id: RecordId,
    #[serde(flatten)]
    record: &'a Record,
}

pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
    written: u64,
}

impl<W: Write> JsonlWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    pub fn write_record(&mut self, id: RecordId, record: &Record) -> Result<()> {
        let line = serde_json::to_string(&Line { id, record })?;
        writeln!(self.writer, "{}", line)?;
        self.written += 1;
        Ok(())
    }

    /// Drain a reader into the sink, stopping at the first error. Returns the
    /// number of records written by this call.
    pub fn write_all<I>(&mut self, records: I) -> Result<u64>
    where
        I: IntoIterator<Item = Result<(RecordId, Record)>>,
    {
        let before = self.written;
        for item in records {
            let (id, record) = item?;
            self.write_record(id, &record)?;
        }
        self.writer.flush()?;
        Ok(self.written - before)
    }

    /// Records written over the writer's lifetime.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the inner writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::error::Error::Io(e.into_error()))
    }
}
