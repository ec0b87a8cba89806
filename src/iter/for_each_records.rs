use crate::errors::*;
use crate::iter::*;
use crate::record::*;

pub struct ForEachRecords<R: Records, F: Fn(&mut Record) + Send + Sync> {
    records: R,
    func: F,
}

impl<R: Records, F: Fn(&mut Record) + Send + Sync> ForEachRecords<R, F> {
    pub fn new(records: R, func: F) -> Self {
        Self { records, func }
    }
}

impl<R: Records, F: Fn(&mut Record) + Send + Sync> Records for ForEachRecords<R, F> {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;

        for record in records.iter_mut() {
            (self.func)(record);
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()
    }
}
