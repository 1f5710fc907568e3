use thiserror::Error;

/// ошибки разбора исходных файлов UCD
///
/// любая из них фатальна: конвейер прерывается целиком, частичный результат
/// не записывается
#[derive(Debug, Error, PartialEq)]
pub enum SourceError
{
    /// строка не соответствует обязательной грамматике своего файла
    #[error("{file}:{line}: некорректная строка: {content}")]
    MalformedInput
    {
        file: &'static str,
        line: usize,
        content: String,
    },

    /// заголовок блока ссылается на блок, отсутствующий в Blocks.txt
    #[error("{file}:{line}: неизвестный блок: {name}")]
    UnknownBlockReference
    {
        file: &'static str,
        line: usize,
        name: String,
    },

    /// листинг эмодзи ссылается на кодпоинт, отсутствующий в индексе символов
    #[error("кодпоинт U+{code:04X} отсутствует в индексе символов")]
    MissingCharacterReference
    {
        code: u32
    },
}
