use std::collections::HashMap;

use crate::blocks::BlockRange;
use crate::codepoint::parse_code_point;
use crate::dataset::{BlockEntry, CharacterRecord, Subdivision};
use crate::error::SourceError;
use crate::index::{record_mut, CharPos, CharacterIndex};

const FILE: &str = "NamesList.txt";

/// блок "Unassigned" пропускается целиком - без заголовка и содержимого
const UNASSIGNED_BLOCK: &str = "Unassigned";

/// подраздел "Noncharacters" отбрасывается вместе с содержимым
const DROPPED_SUBDIVISION: &str = "Noncharacters";

/// названия-сентинелы: запись не является символом
const SENTINEL_NAMES: [&str; 2] = ["<not a character>", "<reserved>"];

/// название подраздела, синтезируемого для блока, в котором строка символа
/// идет до заголовка подраздела (известная аномалия листинга)
const FALLBACK_SUBDIVISION: &str = "Letters";

/// результат разбора основного листинга
#[derive(Debug)]
pub struct ParsedNamesList
{
    pub blocks: Vec<BlockEntry>,
    pub index: CharacterIndex,
}

/// разбор NamesList.txt: вложенная структура блок → подраздел → символ,
/// с аннотациями символов (алиасы, комментарии, вариации)
///
/// записи листинга различаются первым полем строки (поля разделены табуляцией):
///   `@@` - заголовок блока, `@` - заголовок подраздела, пустое поле -
///   аннотация последнего символа, шестнадцатеричный кодпоинт - символ;
///   прочие маркеры (`@@@`, `@+`, перекрестные ссылки) не несут данных
pub fn parse_names_list(text: &str, ranges: &[BlockRange]) -> Result<ParsedNamesList, SourceError>
{
    let mut parser = Parser::new(ranges);

    for (number, line) in text.lines().enumerate() {
        parser.line(number + 1, line)?;
    }

    Ok(parser.finish())
}

/// состояние разбора
#[derive(Debug, Clone, Copy, PartialEq)]
enum State
{
    /// заголовок блока еще не встречался
    NoBlock,
    /// текущий блок пропускается ("Unassigned")
    SkippingBlock,
    /// блок открыт, подраздела еще нет
    InBlock,
    /// открыт подраздел; dropped - подраздел отбрасывается ("Noncharacters")
    InSubdivision
    {
        dropped: bool
    },
}

/// разборщик листинга
///
/// текущий блок / подраздел / символ - явное состояние, переключаемое
/// маркерами строк; последний разобранный символ запоминается как цель
/// для строк аннотаций
struct Parser<'a>
{
    ranges: &'a [BlockRange],
    by_name: HashMap<&'a str, usize>,
    state: State,
    blocks: Vec<BlockEntry>,
    index: CharacterIndex,
    current: Option<CharPos>,
}

impl<'a> Parser<'a>
{
    fn new(ranges: &'a [BlockRange]) -> Self
    {
        let by_name = ranges
            .iter()
            .enumerate()
            .map(|(position, range)| (range.name.as_str(), position))
            .collect();

        Self {
            ranges,
            by_name,
            state: State::NoBlock,
            blocks: vec![],
            index: CharacterIndex::default(),
            current: None,
        }
    }

    /// обработать строку листинга
    fn line(&mut self, number: usize, line: &str) -> Result<(), SourceError>
    {
        let fields: Vec<&str> = line.split('\t').collect();

        match fields[0] {
            "@@" => self.block_header(number, line, &fields),
            "@" => self.subdivision_header(number, line, &fields),
            "" => {
                self.annotation(&fields);
                Ok(())
            }
            first => {
                if let Some(code) = parse_code_point(first) {
                    self.character(code, &fields);
                }

                Ok(())
            }
        }
    }

    /// `@@` - заголовок блока: завершает предыдущий блок и открывает следующий
    fn block_header(&mut self, number: usize, line: &str, fields: &[&str]) -> Result<(), SourceError>
    {
        self.finalize_block();

        let raw = *fields.get(2).ok_or_else(|| malformed(number, line))?;

        // название в скобках в конце - каноническое название блока
        let name = match raw.ends_with(')') {
            true => match raw.find('(') {
                Some(open) => &raw[open + 1 .. raw.len() - 1],
                None => return Err(malformed(number, line)),
            },
            false => raw,
        };

        if name == UNASSIGNED_BLOCK {
            self.state = State::SkippingBlock;
            return Ok(());
        }

        let range = match self.by_name.get(name) {
            Some(&position) => &self.ranges[position],
            None => {
                return Err(SourceError::UnknownBlockReference {
                    file: FILE,
                    line: number,
                    name: name.to_owned(),
                })
            }
        };

        self.blocks.push(BlockEntry::new(range));
        self.state = State::InBlock;

        Ok(())
    }

    /// `@` - заголовок подраздела текущего блока
    fn subdivision_header(&mut self, number: usize, line: &str, fields: &[&str]) -> Result<(), SourceError>
    {
        match self.state {
            State::SkippingBlock => return Ok(()),
            State::NoBlock => return Err(malformed(number, line)),
            _ => {}
        }

        let name = *fields.get(2).ok_or_else(|| malformed(number, line))?;

        if name == DROPPED_SUBDIVISION {
            self.state = State::InSubdivision { dropped: true };
            return Ok(());
        }

        let block = self.blocks.len() - 1;

        self.blocks[block].subdivisions.push(Subdivision {
            name: name.to_owned(),
            characters: vec![],
        });
        self.state = State::InSubdivision { dropped: false };

        Ok(())
    }

    /// строка аннотации: алиас (`= `), формальный алиас (`% `),
    /// комментарий (`* `), вариация (`~ `)
    ///
    /// аннотация относится к последнему разобранному символу, даже если
    /// с тех пор открылся новый подраздел; аннотации одного вида
    /// накапливаются в порядке листинга
    fn annotation(&mut self, fields: &[&str])
    {
        if matches!(self.state, State::SkippingBlock | State::InSubdivision { dropped: true }) {
            return;
        }

        let payload = match fields.get(1) {
            Some(text) if text.len() >= 2 && text.as_bytes()[1] == b' ' => *text,
            _ => return,
        };

        let kind = payload.as_bytes()[0];

        // перекрестные ссылки (`x `) и прочие пометки данных не несут
        if !matches!(kind, b'=' | b'%' | b'*' | b'~') {
            return;
        }

        let position = match self.current {
            Some(position) => position,
            None => return,
        };

        let annotations = record_mut(&mut self.blocks, position).annotations_mut();
        let value = payload[2 ..].to_owned();

        match kind {
            b'=' => annotations.aliases.push(value),
            b'%' => annotations.formal_aliases.push(value),
            b'*' => annotations.comments.push(value),
            _ => annotations.variations.push(value),
        }
    }

    /// строка символа: `CODE<tab>NAME`
    fn character(&mut self, code: u32, fields: &[&str])
    {
        match self.state {
            State::NoBlock | State::SkippingBlock => return,
            State::InSubdivision { dropped: true } => return,
            _ => {}
        }

        let name = match fields.get(1) {
            Some(name) => *name,
            None => return,
        };

        // место зарезервировано, но символа в нем нет - счетчик блока
        // не увеличивается
        if SENTINEL_NAMES.contains(&name) {
            return;
        }

        let block = self.blocks.len() - 1;
        let (subdivision, character) = self.blocks[block]
            .push_character(FALLBACK_SUBDIVISION, CharacterRecord::new(code, name.to_owned()));

        let position = CharPos {
            block,
            subdivision,
            character,
        };

        self.index.insert(code, position);
        self.current = Some(position);
        self.state = State::InSubdivision { dropped: false };
    }

    /// блок прочитан до конца: блок без единого перечисленного символа -
    /// кандидат на покрытие выводимыми названиями из DerivedName.txt
    fn finalize_block(&mut self)
    {
        if let Some(block) = self.blocks.last_mut() {
            if block.code_point_count == 0 {
                block.included_in_unicode_data = false;
            }
        }
    }

    /// конец листинга
    fn finish(mut self) -> ParsedNamesList
    {
        self.finalize_block();

        ParsedNamesList {
            blocks: self.blocks,
            index: self.index,
        }
    }
}

fn malformed(line: usize, content: &str) -> SourceError
{
    SourceError::MalformedInput {
        file: FILE,
        line,
        content: content.to_owned(),
    }
}
