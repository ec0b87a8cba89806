use thiserror;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error reading or writing \"{file}\": {source}")]
    FileIo {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Error reading or writing bytes: {0}")]
    BytesIo(Box<dyn std::error::Error + Send + Sync>),

    #[error("Error parsing record in \"{file}\": {source}")]
    ParseRecord {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Error parsing preprocessor config: {0}")]
    ParseConfig(Box<dyn std::error::Error + Send + Sync>),

    #[error("Cutting removes the entire header: {header}")]
    EmptyHeader { header: String },

    #[error("Fasta header \"{header}\" found in more than one sample. Headers must be unique to make the table.")]
    DuplicateHeader { header: String },
}

pub fn utf8(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}
