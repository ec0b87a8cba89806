use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use flate2::{write::GzEncoder, Compression};

use crate::errors::*;
use crate::fasta::*;
use crate::iter::*;
use crate::record::*;

pub struct CollectFastaRecords<R: Records> {
    records: R,
    file: String,
    writer: Mutex<Option<Box<dyn Write + std::marker::Send>>>,
}

impl<R: Records> CollectFastaRecords<R> {
    pub fn new(records: R, file: String) -> Self {
        Self {
            records,
            file,
            writer: Mutex::new(None),
        }
    }

    fn open(&self) -> Result<Box<dyn Write + std::marker::Send>> {
        let file_err = |e: std::io::Error| Error::FileIo {
            file: self.file.clone(),
            source: Box::new(e),
        };

        if let Some(parent) = Path::new(&self.file).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(file_err)?;
            }
        }

        let file = File::create(&self.file).map_err(file_err)?;

        Ok(if self.file.ends_with(".gz") {
            Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Box::new(BufWriter::new(file))
        })
    }
}

impl<R: Records> Records for CollectFastaRecords<R> {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        let records = self.records.next_chunk()?;

        let mut writer = self.writer.lock().unwrap();

        if writer.is_none() {
            *writer = Some(self.open()?);
        }
        let writer = writer.as_mut().unwrap();

        for record in &records {
            write_fasta_record(&mut **writer, record.to_fasta())?;
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
