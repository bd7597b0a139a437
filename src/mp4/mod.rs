pub mod r#box;
pub use r#box::{read_box_header, read_root_header, BoxHeader, BoxReader, FourCC, FullBoxHeader};

pub mod avcc;
pub mod ctts;
pub mod dinf;
pub mod file;
pub mod ftyp;
pub mod hdlr;
pub mod mdhd;
pub mod mdia;
pub mod minf;
pub mod moov;
pub mod mvhd;
pub mod stbl;
pub mod stco;
pub mod stsc;
pub mod stsd;
pub mod stss;
pub mod stsz;
pub mod stts;
pub mod tkhd;
pub mod trak;

pub use avcc::AvcC;
pub use file::Mp4File;
pub use hdlr::{HANDLER_SOUND, HANDLER_VIDEO};
pub use stsc::SampleToChunkEntry;
