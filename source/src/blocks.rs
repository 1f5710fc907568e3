use crate::codepoint::parse_code_point;
use crate::error::SourceError;

const FILE: &str = "Blocks.txt";

/// диапазон кодпоинтов из Blocks.txt
///
/// диапазоны в файле не пересекаются и отсортированы по началу;
/// порядок блоков в итоговом документе - порядок этого списка
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRange
{
    pub start: u32,
    pub end: u32,
    /// каноническое название блока
    pub name: String,
    /// нормализованный идентификатор
    pub id: String,
}

/// нормализованный идентификатор блока: нижний регистр, пробелы → дефисы
pub fn block_id(name: &str) -> String
{
    name.to_lowercase().replace(' ', "-")
}

/// разбор Blocks.txt - упорядоченный список именованных диапазонов
///
/// формат строки: `START..END; Name`, кодпоинты - шестнадцатеричные, в верхнем
/// регистре; пустые строки и комментарии (`#`) пропускаются, все остальное
/// обязано соответствовать грамматике
pub fn parse_blocks(text: &str) -> Result<Vec<BlockRange>, SourceError>
{
    let mut ranges = vec![];

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || SourceError::MalformedInput {
            file: FILE,
            line: number + 1,
            content: line.to_owned(),
        };

        let (range, name) = line.split_once("; ").ok_or_else(malformed)?;
        let (start, end) = range.split_once("..").ok_or_else(malformed)?;

        ranges.push(BlockRange {
            start: parse_code_point(start).ok_or_else(malformed)?,
            end: parse_code_point(end).ok_or_else(malformed)?,
            name: name.to_owned(),
            id: block_id(name),
        });
    }

    Ok(ranges)
}
