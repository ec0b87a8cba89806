use std::fmt;
use std::sync::Arc;

use crate::errors::utf8;

/// A single fasta record: the header line (without the leading `>`) and its residues.
///
/// The header is the full description line, so `>chr1  AC:CM000663.2` is stored as
/// `chr1  AC:CM000663.2`. Records also remember where they came from, which is shown
/// by [`dbg`](crate::iter::Records::dbg) and useful when tracking down bad input.
#[derive(Debug, Clone)]
pub struct Record {
    header: Vec<u8>,
    seq: Vec<u8>,
    file: Arc<String>,
    idx: usize,
}

impl Record {
    pub fn from_fasta(header: &[u8], seq: &[u8], file: Arc<String>, idx: usize) -> Self {
        Self {
            header: header.to_owned(),
            seq: seq.to_owned(),
            file,
            idx,
        }
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Replace the header line. The residues are never modified.
    pub fn set_header(&mut self, header: Vec<u8>) {
        self.header = header;
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// 0-based index of this record in its source file.
    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn to_fasta(&self) -> (&[u8], &[u8]) {
        (&self.header, &self.seq)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "header {}", utf8(&self.header))?;
        writeln!(f, "seq    {}", utf8(&self.seq))?;
        writeln!(f, "from record {} in file: \"{}\"", self.idx, self.file)
    }
}
