use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Mutex;

use crate::cutter::*;
use crate::errors::*;
use crate::iter::*;
use crate::record::*;

pub struct HeaderTableRecords<R: Records> {
    records: R,
    file: String,
    event: String,
    params: Option<CutParams>,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl<R: Records> HeaderTableRecords<R> {
    pub fn new(records: R, file: String, event: String, params: Option<CutParams>) -> Self {
        // no-op parameters are skipped, not run, so a header that would otherwise
        // cut down to nothing passes through unchanged
        let params = params.filter(|p| !p.is_noop());

        Self {
            records,
            file,
            event,
            params,
            writer: Mutex::new(None),
        }
    }
}

impl<R: Records> Records for HeaderTableRecords<R> {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        let records = self.records.next_chunk()?;

        let file_err = |e: std::io::Error| Error::FileIo {
            file: self.file.clone(),
            source: Box::new(e),
        };

        let mut writer = self.writer.lock().unwrap();

        if writer.is_none() {
            *writer = Some(BufWriter::new(File::create(&self.file).map_err(file_err)?));
        }
        let writer = writer.as_mut().unwrap();

        for record in &records {
            let header = record.header();
            let cut = match &self.params {
                Some(params) => params.cut(header)?,
                None => header,
            };

            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                utf8(header),
                utf8(cut),
                self.event,
                record.len()
            )
            .map_err(file_err)?;
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()?;

        if let Some(writer) = self.writer.lock().unwrap().as_mut() {
            writer.flush().map_err(|e| Error::FileIo {
                file: self.file.clone(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
