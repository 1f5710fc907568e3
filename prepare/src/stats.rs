use unicode_reference_source::UnicodeDataset;

/// статистика собранного документа
pub fn print(dataset: &UnicodeDataset)
{
    let characters: usize = dataset
        .blocks
        .iter()
        .flat_map(|block| block.subdivisions.iter())
        .map(|subdivision| subdivision.characters.len())
        .sum();

    let ranges: usize = dataset
        .blocks
        .iter()
        .map(|block| block.auto_named_ranges.len())
        .sum();

    let code_points: u64 = dataset
        .blocks
        .iter()
        .map(|block| block.code_point_count as u64)
        .sum();

    let large = dataset.blocks.iter().filter(|block| block.large_block).count();

    println!(
        "собрано:\n  \
        блоков: {}\n  \
        символов: {}\n  \
        диапазонов с выводимыми названиями: {}\n  \
        больших блоков: {}\n  \
        всего кодпоинтов: {}\n  \
        версий Unicode: {}",
        dataset.blocks.len(),
        characters,
        ranges,
        large,
        code_points,
        dataset.version_date_table.len(),
    );
}
