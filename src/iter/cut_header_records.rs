use crate::cutter::*;
use crate::errors::*;
use crate::iter::*;
use crate::record::*;

pub struct CutHeaderRecords<R: Records> {
    records: R,
    params: CutParams,
}

impl<R: Records> CutHeaderRecords<R> {
    pub fn new(records: R, params: CutParams) -> Self {
        Self { records, params }
    }
}

impl<R: Records> Records for CutHeaderRecords<R> {
    fn next_chunk(&self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;

        for record in records.iter_mut() {
            let header = self.params.cut(record.header())?.to_vec();
            record.set_header(header);
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()
    }
}
