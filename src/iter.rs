use std::marker::{Send, Sync};
use std::thread;

use crate::cutter::*;
use crate::errors::*;
use crate::record::*;

pub mod cut_header_records;
use cut_header_records::*;

pub mod collect_fasta_records;
use collect_fasta_records::*;

pub mod header_table_records;
use header_table_records::*;

pub mod for_each_records;
use for_each_records::*;

pub mod count_records;
use count_records::*;

pub trait Records: Send + Sync {
    fn run(mut self) -> Result<()>
    where
        Self: Sized,
    {
        while !self.next_chunk()?.is_empty() {}
        self.finish()
    }

    fn run_with_threads(mut self, threads: usize)
    where
        Self: Sized,
    {
        assert!(threads >= 1, "Number of threads must be greater than zero");

        thread::scope(|s| {
            for _ in 0..threads {
                s.spawn(|| {
                    while !self
                        .next_chunk()
                        .unwrap_or_else(|e| panic!("Error when running: {e}"))
                        .is_empty()
                    {}
                });
            }
        });

        self.finish()
            .unwrap_or_else(|e| panic!("Error when running: {e}"));
    }

    fn run_collect_records(mut self) -> Result<Vec<Record>>
    where
        Self: Sized,
    {
        let mut res = Vec::new();

        loop {
            let records = self.next_chunk()?;

            if records.is_empty() {
                break;
            }

            res.extend(records);
        }

        self.finish()?;
        Ok(res)
    }

    /// Cut the header of every record with the given parameters.
    #[must_use]
    fn cut_headers(self, params: CutParams) -> CutHeaderRecords<Self>
    where
        Self: Sized,
    {
        CutHeaderRecords::new(self, params)
    }

    /// Write every record to a fasta file. A `.gz` suffix selects gzip output.
    #[must_use]
    fn collect_fasta(self, file: impl AsRef<str>) -> CollectFastaRecords<Self>
    where
        Self: Sized,
    {
        CollectFastaRecords::new(self, file.as_ref().to_owned())
    }

    /// Write one header-table row per record:
    /// `original_header \t cut_header \t event \t sequence_length`.
    ///
    /// When `params` is `None` (or cuts nothing), the cut header equals the
    /// original and the cutter is skipped entirely.
    #[must_use]
    fn header_table(
        self,
        file: impl AsRef<str>,
        event: impl AsRef<str>,
        params: Option<CutParams>,
    ) -> HeaderTableRecords<Self>
    where
        Self: Sized,
    {
        HeaderTableRecords::new(
            self,
            file.as_ref().to_owned(),
            event.as_ref().to_owned(),
            params,
        )
    }

    #[must_use]
    fn for_each<F>(self, func: F) -> ForEachRecords<Self, F>
    where
        F: Fn(&mut Record) + Send + Sync,
        Self: Sized,
    {
        ForEachRecords::new(self, func)
    }

    #[must_use]
    fn dbg(self) -> ForEachRecords<Self, fn(&mut Record)>
    where
        Self: Sized,
    {
        ForEachRecords::new(self, |record| eprintln!("{}", record))
    }

    /// Count the records flowing through; `func` receives the total on finish.
    #[must_use]
    fn count<F>(self, func: F) -> CountRecords<Self, F>
    where
        F: Fn(usize) + Send + Sync,
        Self: Sized,
    {
        CountRecords::new(self, func)
    }

    #[must_use]
    fn boxed(self) -> Box<dyn Records>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    fn next_chunk(&self) -> Result<Vec<Record>>;

    fn finish(&mut self) -> Result<()>;
}

impl<R: Records + ?Sized> Records for Box<R> {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        (**self).next_chunk()
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
