use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while parsing an
/// ISO Base Media file or extracting its samples.
///
/// Every parse-time error is fatal: there is no partial-tree recovery.
#[derive(Debug)]
pub enum Mp4Error {
    /// Fewer bytes were available than a field requires.
    TruncatedRead { message: String },
    /// A box body consumed more bytes than its declared size.
    CorruptBox { message: String },
    /// A box violates a hard structural assumption (multi-entry data
    /// reference, unknown child inside a strict container, unexpected
    /// sample-entry count).
    UnsupportedBox { message: String },
    /// Required index tables are missing, or a forbidden table is present,
    /// for the track's media type.
    IncompleteSampleTable { message: String },
    /// Non-AVC video sample entry, or an unexpected avcC configuration
    /// version.
    WrongCodecVersion { message: String },
    /// The sample locator ran past the end of the chunk offset table.
    ChunkIndexOutOfRange { message: String },
    /// A short read while copying sample bytes out of the source file.
    TruncatedSample { message: String },
    /// A parser needed state from an ancestor box that has not been
    /// populated yet (e.g. stsd before hdlr).
    MissingAncestorState { message: String },
    /// Filesystem error outside of parsing proper.
    Io(io::Error),
}

impl Mp4Error {
    pub fn truncated(message: impl Into<String>) -> Self {
        Mp4Error::TruncatedRead {
            message: message.into(),
        }
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        Mp4Error::CorruptBox {
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Mp4Error::UnsupportedBox {
            message: message.into(),
        }
    }
}

impl fmt::Display for Mp4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mp4Error::TruncatedRead { message } => write!(f, "truncated read: {}", message),
            Mp4Error::CorruptBox { message } => write!(f, "corrupt box: {}", message),
            Mp4Error::UnsupportedBox { message } => write!(f, "unsupported box: {}", message),
            Mp4Error::IncompleteSampleTable { message } => {
                write!(f, "incomplete sample table: {}", message)
            }
            Mp4Error::WrongCodecVersion { message } => {
                write!(f, "wrong codec version: {}", message)
            }
            Mp4Error::ChunkIndexOutOfRange { message } => {
                write!(f, "chunk index out of range: {}", message)
            }
            Mp4Error::TruncatedSample { message } => write!(f, "truncated sample: {}", message),
            Mp4Error::MissingAncestorState { message } => {
                write!(f, "missing ancestor state: {}", message)
            }
            Mp4Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for Mp4Error {}

impl From<io::Error> for Mp4Error {
    fn from(err: io::Error) -> Self {
        // read_exact reports short input as UnexpectedEof; that is the
        // parser's TruncatedRead fault, not a generic I/O failure.
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Mp4Error::TruncatedRead {
                message: err.to_string(),
            }
        } else {
            Mp4Error::Io(err)
        }
    }
}

impl From<Mp4Error> for io::Error {
    fn from(err: Mp4Error) -> Self {
        io::Error::other(err)
    }
}

/// Type alias for Result with Mp4Error
pub type Mp4Result<T> = Result<T, Mp4Error>;
