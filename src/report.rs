/*!
CSV scan report: one `country,asn,prefix,file,batch` row per discovered address list.
*/
use crate::error::PrefixFinderError;
use crate::io::get_writer;
use crate::models::ReportRow;
use std::io::Write;
use std::path::Path;

pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl ReportWriter<Box<dyn Write>> {
    /// Creates the report file at `path`; a `.gz` or `.bz2` extension compresses it.
    ///
    /// The compressor trailer is written when the writer returned by [ReportWriter::finish] is
    /// dropped. The boxed writer has no fallible finalizer, so an error at that point is not
    /// reported; drop it before reading the file back.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, PrefixFinderError> {
        ReportWriter::from_writer(get_writer(path.as_ref())?)
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wraps `writer` and emits the header line straight away, so an empty scan still produces
    /// a well-formed report.
    pub fn from_writer(writer: W) -> Result<Self, PrefixFinderError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(ReportRow::get_csv_header())?;
        Ok(ReportWriter { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &ReportRow) -> Result<(), PrefixFinderError> {
        self.writer.serialize(row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes buffered rows and hands back the underlying writer.
    ///
    /// Flushing does not finalize a compressed stream; see [ReportWriter::create].
    pub fn finish(self) -> Result<W, PrefixFinderError> {
        let mut inner = self
            .writer
            .into_inner()
            .map_err(|e| PrefixFinderError::IoError(e.into_error()))?;
        inner.flush()?;
        Ok(inner)
    }
}
