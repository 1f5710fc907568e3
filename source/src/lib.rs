mod age;
mod assemble;
mod blocks;
mod codepoint;
mod cursor;
mod dataset;
mod derived_names;
mod emoji;
mod error;
mod index;
mod names_list;

pub use assemble::assemble;
pub use assemble::SourceTexts;

pub use blocks::block_id;
pub use blocks::parse_blocks;
pub use blocks::BlockRange;

pub use names_list::parse_names_list;
pub use names_list::ParsedNamesList;

pub use derived_names::merge_derived_names;

pub use age::tag_versions;

pub use emoji::tag_emoji;

pub use dataset::Annotations;
pub use dataset::AutoNamedRange;
pub use dataset::BlockEntry;
pub use dataset::CharacterRecord;
pub use dataset::EmojiQualification;
pub use dataset::Subdivision;
pub use dataset::UnicodeDataset;
pub use dataset::VersionDateTable;
pub use dataset::LARGE_BLOCK_THRESHOLD;
pub use dataset::UNKNOWN_VERSION;

pub use index::record_mut;
pub use index::CharPos;
pub use index::CharacterIndex;

pub use cursor::CodeSpan;
pub use cursor::SpanCursor;

pub use codepoint::is_code_point;
pub use codepoint::parse_code_point;
pub use codepoint::parse_code_point_range;

pub use error::SourceError;
