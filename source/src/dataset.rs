use indexmap::IndexMap;
use serde::Serialize;

use crate::blocks::BlockRange;

/// сентинел версии: записывается при создании символа, позже перезаписывается
/// по данным DerivedAge.txt
pub const UNKNOWN_VERSION: &str = "UNKNOWN VERSION";

/// блок с большим количеством кодпоинтов помечается флагом largeBlock -
/// сигнал потребителю не разворачивать полное перечисление
pub const LARGE_BLOCK_THRESHOLD: u32 = 2_000;

/// квалификация эмодзи: отображается-ли символ по умолчанию
/// как эмодзи (qualified) или как текст (unqualified)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiQualification
{
    Qualified,
    Unqualified,
}

/// аннотации символа из NamesList.txt; создаются лениво, при первой аннотации
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotations
{
    /// алиасы (`= `)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// формальные алиасы (`% `)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub formal_aliases: Vec<String>,
    /// комментарии (`* `)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    /// вариации (`~ `)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_qualification: Option<EmojiQualification>,
}

/// символ Unicode: кодпоинт, название, версия появления, аннотации
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord
{
    pub code_point: u32,
    pub primary_name: String,
    pub unicode_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl CharacterRecord
{
    /// новая запись символа; версия заполняется сентинелом
    pub fn new(code_point: u32, primary_name: String) -> Self
    {
        Self {
            code_point,
            primary_name,
            unicode_version: UNKNOWN_VERSION.to_owned(),
            annotations: None,
        }
    }

    /// аннотации символа, с ленивым созданием
    pub fn annotations_mut(&mut self) -> &mut Annotations
    {
        self.annotations.get_or_insert_with(Annotations::default)
    }
}

/// подраздел блока; порядок символов - порядок исходного листинга
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subdivision
{
    pub name: String,
    pub characters: Vec<CharacterRecord>,
}

/// большой диапазон символов, названия которых механически выводятся
/// из кодпоинта (CJK, хангыль, тангутский); хранится диапазоном,
/// а не отдельными записями
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoNamedRange
{
    pub start: u32,
    pub end: u32,
    /// постоянная часть шаблона названия, без плейсхолдера
    pub name_prefix: String,
}

/// блок в итоговом документе
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockEntry
{
    pub name: String,
    pub id: String,
    pub start: u32,
    pub end: u32,
    /// false - блок не перечислен в основном листинге и ожидает покрытия
    /// диапазонами с выводимыми названиями
    pub included_in_unicode_data: bool,
    /// перечисленные символы плюс суммарная ширина auto_named_ranges
    pub code_point_count: u32,
    pub subdivisions: Vec<Subdivision>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auto_named_ranges: Vec<AutoNamedRange>,
    #[serde(skip_serializing_if = "is_false")]
    pub large_block: bool,
}

fn is_false(value: &bool) -> bool
{
    !*value
}

impl BlockEntry
{
    /// пустой блок по диапазону из Blocks.txt
    pub fn new(range: &BlockRange) -> Self
    {
        Self {
            name: range.name.clone(),
            id: range.id.clone(),
            start: range.start,
            end: range.end,
            included_in_unicode_data: true,
            code_point_count: 0,
            subdivisions: vec![],
            auto_named_ranges: vec![],
            large_block: false,
        }
    }

    /// добавить символ в последний подраздел блока; при отсутствии подразделов
    /// создается подраздел с указанным названием
    ///
    /// возвращает позицию символа (подраздел, индекс в подразделе)
    pub fn push_character(&mut self, subdivision_name: &str, character: CharacterRecord) -> (usize, usize)
    {
        if self.subdivisions.is_empty() {
            self.subdivisions.push(Subdivision {
                name: subdivision_name.to_owned(),
                characters: vec![],
            });
        }

        let subdivision = self.subdivisions.len() - 1;
        let characters = &mut self.subdivisions[subdivision].characters;

        characters.push(character);
        self.code_point_count += 1;

        (subdivision, characters.len() - 1)
    }
}

/// таблица версия Unicode → дата публикации; порядок - порядок секций
/// DerivedAge.txt (версии не сортируются лексикографически)
pub type VersionDateTable = IndexMap<String, String>;

/// итоговый документ: таблица версий и блоки в порядке Blocks.txt
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnicodeDataset
{
    pub version_date_table: VersionDateTable,
    pub blocks: Vec<BlockEntry>,
}
