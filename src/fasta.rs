use needletail::*;

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use log::info;

use crate::cutter::CutParams;
use crate::errors::*;
use crate::iter::*;
use crate::record::*;

/// Default number of records pulled per chunk.
pub const CHUNK_SIZE: usize = 256;

/// Residues per line in fasta output.
pub const FASTA_LINE_WIDTH: usize = 60;

pub struct FastaRecords {
    reader: Mutex<Box<dyn FastxReader>>,
    file: Arc<String>,
    idx: AtomicUsize,
    chunk_size: usize,
}

impl Records for FastaRecords {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        let mut res = Vec::with_capacity(self.chunk_size);

        let mut reader = self.reader.lock().unwrap();

        for _ in 0..self.chunk_size {
            let Some(record) = reader.next() else {
                break;
            };
            let record = record.map_err(|e| Error::ParseRecord {
                file: (*self.file).clone(),
                source: Box::new(e),
            })?;
            let idx = self.idx.fetch_add(1, Ordering::SeqCst);

            res.push(Record::from_fasta(
                record.id(),
                &record.seq(),
                Arc::clone(&self.file),
                idx,
            ));
        }

        Ok(res)
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Read fasta records from `file` (gzip input is handled transparently).
pub fn read_fasta(file: impl AsRef<str>, chunk_size: usize) -> Result<FastaRecords> {
    let reader = parse_fastx_file(file.as_ref()).map_err(|e| Error::FileIo {
        file: file.as_ref().to_owned(),
        source: Box::new(e),
    })?;

    Ok(FastaRecords {
        reader: Mutex::new(reader),
        file: Arc::new(file.as_ref().to_owned()),
        idx: AtomicUsize::new(0),
        chunk_size,
    })
}

pub fn write_fasta_record(
    writer: &mut (dyn Write + std::marker::Send),
    record: (&[u8], &[u8]),
) -> Result<()> {
    let res = (|| -> std::io::Result<()> {
        writer.write_all(b">")?;
        writer.write_all(record.0)?;
        writer.write_all(b"\n")?;
        for line in record.1.chunks(FASTA_LINE_WIDTH) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    })();

    res.map_err(|e| Error::BytesIo(Box::new(e)))
}

/// Rewrite a fasta artifact with cut headers.
///
/// Every header in `input` goes through [`CutParams::cut`]; the rewritten records
/// land in `output` (`.gz` output is compressed). Fails on the first header that
/// cutting would remove entirely.
pub fn cut_fasta(input: &str, params: &CutParams, output: &str) -> Result<()> {
    read_fasta(input, CHUNK_SIZE)?
        .cut_headers(params.clone())
        .collect_fasta(output)
        .run()?;

    info!("cut headers of \"{}\" into \"{}\"", input, output);
    Ok(())
}
