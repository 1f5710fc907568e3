use std::env;
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::exit;

use unicode_reference_source::{assemble, SourceTexts};

mod stats;

/// каталог с исходными файлами UCD по умолчанию
const DEFAULT_UCD_DIR: &str = "./data/ucd";

/// название итогового файла
const OUTPUT_FILE: &str = "ucd.json";

fn main()
{
    let dir = PathBuf::from(env::args().nth(1).unwrap_or_else(|| DEFAULT_UCD_DIR.to_owned()));

    if let Err(error) = run(&dir) {
        eprintln!("{}", error);
        exit(1);
    }
}

/// прочитать исходники, собрать документ, записать ucd.json
fn run(dir: &Path) -> Result<(), Box<dyn Error>>
{
    let texts = SourceTexts {
        blocks: read(&dir.join("Blocks.txt"))?,
        names_list: read(&dir.join("NamesList.txt"))?,
        derived_names: read(&dir.join("extracted/DerivedName.txt"))?,
        derived_age: read(&dir.join("DerivedAge.txt"))?,
        emoji_sequences: read(&dir.join("emoji-sequences.txt"))?,
    };

    let dataset = assemble(&texts)?;

    // сериализация в буфер: при ошибке на диск не попадает частичный результат
    let output = serde_json::to_vec(&dataset)?;

    // итоговый файл лежит рядом с каталогом исходников, а не внутри него
    let target = dir.parent().unwrap_or_else(|| Path::new(".")).join(OUTPUT_FILE);

    fs::write(target, output)?;

    stats::print(&dataset);

    Ok(())
}

/// прочитать исходный файл, нормализовав переводы строк
fn read(path: &Path) -> Result<String, io::Error>
{
    Ok(fs::read_to_string(path)?.replace('\r', ""))
}
