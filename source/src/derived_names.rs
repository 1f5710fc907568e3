use crate::codepoint::parse_code_point;
use crate::cursor::SpanCursor;
use crate::dataset::{AutoNamedRange, BlockEntry, CharacterRecord, LARGE_BLOCK_THRESHOLD};
use crate::error::SourceError;
use crate::index::{CharPos, CharacterIndex};

const FILE: &str = "DerivedName.txt";

/// слияние DerivedName.txt с построенными блоками
///
/// листинг отсортирован по возрастанию кодпоинтов и покрывает все кодовое
/// пространство, включая уже разобранные символы; заполняются только блоки,
/// не покрытые основным листингом: диапазоны становятся компактными записями
/// с выводимыми названиями, одиночные кодпоинты - обычными символами
pub fn merge_derived_names(
    text: &str,
    blocks: &mut [BlockEntry],
    index: &mut CharacterIndex,
) -> Result<(), SourceError>
{
    // оба списка отсортированы по кодпоинтам: курсор продвигается по блокам
    // в ногу с листингом, не возвращаясь к началу
    let mut cursor = SpanCursor::new();

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

        let (field, name) = line.split_once(';').ok_or_else(malformed)?;
        let field = field.trim();
        let name = name.trim();

        if name.is_empty() {
            return Err(malformed());
        }

        let (start, end) = match field.split_once("..") {
            Some((start, end)) => {
                let start = parse_code_point(start).ok_or_else(malformed)?;
                let end = parse_code_point(end).ok_or_else(malformed)?;

                // перевернутый диапазон - вне грамматики
                if start > end {
                    return Err(malformed());
                }

                (start, Some(end))
            }
            None => (parse_code_point(field).ok_or_else(malformed)?, None),
        };

        let position = cursor.advance_to(blocks, start).ok_or_else(malformed)?;
        let block = &mut blocks[position];

        // блок уже покрыт основным листингом
        if block.included_in_unicode_data {
            continue;
        }

        match end {
            Some(end) => {
                // шаблон названия оканчивается плейсхолдером, подставляемым
                // для каждого кодпоинта - храним только постоянный префикс
                block.auto_named_ranges.push(AutoNamedRange {
                    start,
                    end,
                    name_prefix: name[.. name.len() - 1].to_owned(),
                });
                block.code_point_count += end - start + 1;
            }
            None => {
                let subdivision_name = block.name.clone();
                let (subdivision, character) =
                    block.push_character(&subdivision_name, CharacterRecord::new(start, name.to_owned()));

                index.insert(
                    start,
                    CharPos {
                        block: position,
                        subdivision,
                        character,
                    },
                );
            }
        }
    }

    finalize(blocks);

    Ok(())
}

/// финализация блоков после слияния: блок, так и оставшийся пустым,
/// считается легитимно пустым; большие блоки помечаются для потребителя
fn finalize(blocks: &mut [BlockEntry])
{
    for block in blocks.iter_mut() {
        if !block.included_in_unicode_data && block.code_point_count == 0 {
            block.included_in_unicode_data = true;
        } else if block.code_point_count > LARGE_BLOCK_THRESHOLD {
            block.large_block = true;
        }
    }
}
