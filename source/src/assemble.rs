use crate::age::tag_versions;
use crate::blocks::parse_blocks;
use crate::dataset::UnicodeDataset;
use crate::derived_names::merge_derived_names;
use crate::emoji::tag_emoji;
use crate::error::SourceError;
use crate::names_list::{parse_names_list, ParsedNamesList};

/// тексты пяти исходных файлов UCD
///
/// файлы буферизуются целиком до начала разбора: перекрестные ссылки
/// (поиск блока по названию, символа по кодпоинту) требуют произвольного
/// доступа; переводы строк ожидаются нормализованными (`\n`)
pub struct SourceTexts
{
    pub blocks: String,
    pub names_list: String,
    pub derived_names: String,
    pub derived_age: String,
    pub emoji_sequences: String,
}

/// сборка итогового документа - строго последовательные стадии над общей
/// моделью (список блоков и индекс кодпоинт → символ):
///
/// 1. Blocks.txt → упорядоченные диапазоны блоков
/// 2. NamesList.txt → блоки / подразделы / символы с аннотациями
/// 3. DerivedName.txt → покрытие блоков с выводимыми названиями
/// 4. DerivedAge.txt → версии символов и таблица версия → дата
/// 5. emoji-sequences.txt → квалификация эмодзи
/// 6. объединение таблицы версий и блоков в документ
///
/// результат детерминирован: одинаковые исходники дают одинаковый порядок
/// блоков и одинаковые счетчики кодпоинтов
pub fn assemble(texts: &SourceTexts) -> Result<UnicodeDataset, SourceError>
{
    let ranges = parse_blocks(&texts.blocks)?;

    let ParsedNamesList { mut blocks, mut index } = parse_names_list(&texts.names_list, &ranges)?;

    merge_derived_names(&texts.derived_names, &mut blocks, &mut index)?;

    let version_date_table = tag_versions(&texts.derived_age, &mut blocks, &index)?;

    tag_emoji(&texts.emoji_sequences, &mut blocks, &index)?;

    Ok(UnicodeDataset {
        version_date_table,
        blocks,
    })
}
