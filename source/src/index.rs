use std::collections::BTreeMap;

use crate::dataset::{BlockEntry, CharacterRecord};

/// позиция записи символа в дереве блоков
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharPos
{
    pub block: usize,
    pub subdivision: usize,
    pub character: usize,
}

/// индекс кодпоинт → позиция записи
///
/// живет только на время сборки: дает стадиям проставления версий и эмодзи
/// доступ к записям по кодпоинту; в документ не попадает
#[derive(Debug, Default)]
pub struct CharacterIndex
{
    positions: BTreeMap<u32, CharPos>,
}

impl CharacterIndex
{
    pub fn insert(&mut self, code: u32, position: CharPos)
    {
        self.positions.insert(code, position);
    }

    pub fn get(&self, code: u32) -> Option<CharPos>
    {
        self.positions.get(&code).copied()
    }

    pub fn contains(&self, code: u32) -> bool
    {
        self.positions.contains_key(&code)
    }

    pub fn len(&self) -> usize
    {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.positions.is_empty()
    }

    /// известные кодпоинты диапазона с позициями, по возрастанию
    pub fn in_range(&self, start: u32, end: u32) -> impl Iterator<Item = (u32, CharPos)> + '_
    {
        self.positions
            .range(start ..= end)
            .map(|(code, position)| (*code, *position))
    }
}

/// запись символа по позиции из индекса
pub fn record_mut(blocks: &mut [BlockEntry], position: CharPos) -> &mut CharacterRecord
{
    &mut blocks[position.block].subdivisions[position.subdivision].characters[position.character]
}
