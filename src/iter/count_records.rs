use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::*;
use crate::iter::*;
use crate::record::*;

pub struct CountRecords<R: Records, F: Fn(usize) + Send + Sync> {
    records: R,
    count: AtomicUsize,
    func: F,
}

impl<R: Records, F: Fn(usize) + Send + Sync> CountRecords<R, F> {
    pub fn new(records: R, func: F) -> Self {
        Self {
            records,
            count: AtomicUsize::new(0),
            func,
        }
    }
}

impl<R: Records, F: Fn(usize) + Send + Sync> Records for CountRecords<R, F> {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        let records = self.records.next_chunk()?;
        self.count.fetch_add(records.len(), Ordering::Relaxed);
        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()?;
        (self.func)(self.count.load(Ordering::Relaxed));
        Ok(())
    }
}
