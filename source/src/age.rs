use crate::codepoint::parse_code_point_range;
use crate::dataset::{BlockEntry, VersionDateTable};
use crate::error::SourceError;
use crate::index::{record_mut, CharacterIndex};

const FILE: &str = "DerivedAge.txt";

/// заголовок секции с версией: `# Age=V15_0`
const AGE_HEADER: &str = "# Age=V";

/// строки с датой публикации версии
const ASSIGNED_CAPTION: &str = "# Assigned as of Unicode ";
const NEWLY_ASSIGNED_CAPTION: &str = "# Newly assigned in Unicode ";

/// разбор DerivedAge.txt: каждому известному символу проставляется версия
/// Unicode, в которой он появился; попутно собирается таблица версия → дата
///
/// строки данных покрывают и кодпоинты, не попавшие в документ (суррогаты,
/// выводимые диапазоны) - такие кодпоинты молча пропускаются
pub fn tag_versions(
    text: &str,
    blocks: &mut [BlockEntry],
    index: &CharacterIndex,
) -> Result<VersionDateTable, SourceError>
{
    let mut table = VersionDateTable::default();
    let mut version: Option<String> = None;

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let malformed = || SourceError::MalformedInput {
            file: FILE,
            line: number + 1,
            content: line.to_owned(),
        };

        if let Some(rest) = line.strip_prefix(AGE_HEADER) {
            version = Some(rest.replace('_', "."));
        } else if line.starts_with(ASSIGNED_CAPTION) || line.starts_with(NEWLY_ASSIGNED_CAPTION) {
            let current = version.clone().ok_or_else(malformed)?;
            let date = parse_caption_date(line).ok_or_else(malformed)?;

            table.insert(current, date);
        } else if !line.starts_with('#') {
            let current = version.as_ref().ok_or_else(malformed)?;

            let field = match line.split_once(';') {
                Some((field, _)) => field,
                None => line,
            };

            let (start, end) = parse_code_point_range(field.trim()).ok_or_else(malformed)?;

            for (_, position) in index.in_range(start, end) {
                record_mut(blocks, position).unicode_version = current.clone();
            }
        }
    }

    Ok(table)
}

/// дата публикации из строки вида
/// `# Assigned as of Unicode 15.0 (September, 2022)` → "September 2022"
fn parse_caption_date(line: &str) -> Option<String>
{
    let (_, tail) = line.rsplit_once(" (")?;
    let (month, year) = tail.strip_suffix(')')?.split_once(", ")?;

    Some(format!("{} {}", month, year))
}
