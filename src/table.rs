use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;

use log::info;
use rustc_hash::FxHashSet;

use crate::cutter::CutParams;
use crate::errors::*;
use crate::fasta::*;
use crate::iter::*;

/// One per-sample fasta input and the event label of the dataset it belongs to.
#[derive(Debug, Clone)]
pub struct SampleFasta {
    pub file: String,
    pub event: String,
}

impl SampleFasta {
    pub fn new(file: impl AsRef<str>, event: impl AsRef<str>) -> Self {
        Self {
            file: file.as_ref().to_owned(),
            event: event.as_ref().to_owned(),
        }
    }
}

/// Write the header table for one sample: one row per record in `fasta`, with the
/// original header, the cut header, `event`, and the sequence length.
pub fn make_sample_table(
    fasta: &str,
    event: &str,
    params: Option<&CutParams>,
    table: &Path,
) -> Result<()> {
    read_fasta(fasta, CHUNK_SIZE)?
        .header_table(table.to_string_lossy(), event, params.cloned())
        .run()?;

    info!(
        "wrote header table for event \"{}\" to \"{}\"",
        event,
        table.display()
    );
    Ok(())
}

/// Build per-sample header tables in parallel and join them into `out`.
///
/// Each sample runs as its own task and writes a part table under `work_dir`. The
/// join concatenates the parts in the order of `samples`. Any task failure aborts
/// the whole build; so does a fasta header appearing in more than one row.
pub fn make_header_table(
    samples: &[SampleFasta],
    params: Option<&CutParams>,
    work_dir: &Path,
    out: &Path,
) -> Result<()> {
    std::fs::create_dir_all(work_dir).map_err(|e| Error::FileIo {
        file: work_dir.display().to_string(),
        source: Box::new(e),
    })?;

    let parts = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| work_dir.join(format!("{:03}.{}.headers.tsv", i, sample.event)))
        .collect::<Vec<_>>();

    thread::scope(|s| {
        let handles = samples
            .iter()
            .zip(&parts)
            .map(|(sample, part)| {
                s.spawn(move || make_sample_table(&sample.file, &sample.event, params, part))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;

    join_header_tables(&parts, out)
}

/// Concatenate per-sample header tables into `out`, checking along the way that no
/// original header appears in more than one row.
pub fn join_header_tables(tables: &[PathBuf], out: &Path) -> Result<()> {
    let file_err = |file: &Path, e: std::io::Error| Error::FileIo {
        file: file.display().to_string(),
        source: Box::new(e),
    };

    let mut writer = BufWriter::new(File::create(out).map_err(|e| file_err(out, e))?);

    let mut seen = FxHashSet::default();
    let mut rows = 0usize;

    for table in tables {
        let reader = BufReader::new(File::open(table).map_err(|e| file_err(table, e))?);

        for line in reader.lines() {
            let line = line.map_err(|e| file_err(table, e))?;
            if line.is_empty() {
                continue;
            }

            let header = line.split('\t').next().unwrap();
            if !seen.insert(header.to_owned()) {
                return Err(Error::DuplicateHeader {
                    header: header.to_owned(),
                });
            }

            writeln!(writer, "{}", line).map_err(|e| file_err(out, e))?;
            rows += 1;
        }
    }

    writer.flush().map_err(|e| file_err(out, e))?;

    info!(
        "joined {} header tables into \"{}\" ({} rows)",
        tables.len(),
        out.display(),
        rows
    );
    Ok(())
}
