use crate::codepoint::parse_code_point_range;
use crate::dataset::{BlockEntry, EmojiQualification};
use crate::error::SourceError;
use crate::index::{record_mut, CharacterIndex};

const FILE: &str = "emoji-sequences.txt";

/// единственная интересующая категория листинга
const BASIC_EMOJI: &str = "Basic_Emoji";

/// суффикс поля кодпоинтов: явный селектор вариации означает, что без него
/// символ отображается как текст (unqualified)
const UNQUALIFIED_SUFFIX: &str = " FE0F";

/// разбор emoji-sequences.txt: отметка символов, по умолчанию отображаемых
/// как эмодзи (qualified) или как текст (unqualified)
///
/// в отличие от DerivedAge.txt, кодпоинт вне индекса здесь - нарушение
/// контракта данных и фатальная ошибка, а не пропуск
pub fn tag_emoji(
    text: &str,
    blocks: &mut [BlockEntry],
    index: &CharacterIndex,
) -> Result<(), SourceError>
{
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (field, rest) = line.split_once(';').ok_or_else(|| SourceError::MalformedInput {
            file: FILE,
            line: number + 1,
            content: line.to_owned(),
        })?;

        let category = match rest.split_once(';') {
            Some((category, _)) => category,
            None => rest,
        };

        if category.trim() != BASIC_EMOJI {
            continue;
        }

        let field = field.trim();

        let (field, qualification) = match field.strip_suffix(UNQUALIFIED_SUFFIX) {
            Some(stripped) => (stripped, EmojiQualification::Unqualified),
            None => (field, EmojiQualification::Qualified),
        };

        let (start, end) = parse_code_point_range(field).ok_or_else(|| SourceError::MalformedInput {
            file: FILE,
            line: number + 1,
            content: line.to_owned(),
        })?;

        for code in start ..= end {
            let position = index
                .get(code)
                .ok_or(SourceError::MissingCharacterReference { code })?;

            record_mut(blocks, position).annotations_mut().emoji_qualification = Some(qualification);
        }
    }

    Ok(())
}
