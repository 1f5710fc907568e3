use unicode_reference_source::{
    merge_derived_names, parse_blocks, parse_names_list, ParsedNamesList, SourceError,
};

/// построить блоки и индекс по Blocks.txt и NamesList.txt
fn parsed(blocks: &str, names: &str) -> ParsedNamesList
{
    let ranges = parse_blocks(blocks).unwrap();

    parse_names_list(names, &ranges).unwrap()
}

/// диапазон с выводимыми названиями: хранится префикс без плейсхолдера,
/// счетчик блока растет на ширину диапазона
#[test]
fn auto_named_range()
{
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "4E00..9FFF; CJK Unified Ideographs\n",
        "@@\t4E00\tCJK Unified Ideographs\t9FFF\n",
    );

    assert!(!blocks[0].included_in_unicode_data);

    merge_derived_names("4E00..9FFF;CJK Ideograph-%\n", &mut blocks, &mut index).unwrap();

    let block = &blocks[0];

    assert_eq!(block.auto_named_ranges.len(), 1);
    assert_eq!(block.auto_named_ranges[0].start, 0x4E00);
    assert_eq!(block.auto_named_ranges[0].end, 0x9FFF);
    assert_eq!(block.auto_named_ranges[0].name_prefix, "CJK Ideograph-");
    assert_eq!(block.code_point_count, 0x9FFF - 0x4E00 + 1);

    // блок покрыт диапазоном, флаг не сбрасывается
    assert!(!block.included_in_unicode_data);

    // диапазон шире порога - блок большой
    assert!(block.large_block);
}

/// одиночные кодпоинты из непокрытых блоков становятся обычными символами
/// в подразделе, названном по блоку; покрытые блоки не трогаются
#[test]
fn sparse_code_points_merged()
{
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "0000..007F; Basic Latin\n\
         0080..00FF; Latin-1 Supplement\n",
        "@@\t0000\tBasic Latin\t007F\n\
         @\t\tLetters\n\
         0041\tLATIN CAPITAL LETTER A\n\
         @@\t0080\tLatin-1 Supplement\t00FF\n",
    );

    let derived = "0041;LATIN CAPITAL LETTER A\n\
                   00C0;LATIN CAPITAL LETTER A WITH GRAVE\n";

    merge_derived_names(derived, &mut blocks, &mut index).unwrap();

    // покрытый блок остался как был
    assert_eq!(blocks[0].code_point_count, 1);
    assert_eq!(blocks[0].subdivisions[0].characters.len(), 1);

    // непокрытый получил символ в подраздел, названный по блоку
    let block = &blocks[1];

    assert_eq!(block.code_point_count, 1);
    assert_eq!(block.subdivisions.len(), 1);
    assert_eq!(block.subdivisions[0].name, "Latin-1 Supplement");
    assert_eq!(block.subdivisions[0].characters[0].code_point, 0xC0);
    assert_eq!(
        block.subdivisions[0].characters[0].primary_name,
        "LATIN CAPITAL LETTER A WITH GRAVE"
    );

    assert!(index.contains(0xC0));
    assert_eq!(index.len(), 2);
}

/// блок, не получивший ни символов, ни диапазонов - легитимно пустой:
/// флаг возвращается обратно
#[test]
fn untouched_block_reset_to_included()
{
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "0000..007F; Basic Latin\n\
         0080..00FF; Latin-1 Supplement\n",
        "@@\t0000\tBasic Latin\t007F\n\
         @\t\tLetters\n\
         0041\tLATIN CAPITAL LETTER A\n\
         @@\t0080\tLatin-1 Supplement\t00FF\n",
    );

    merge_derived_names("0041;LATIN CAPITAL LETTER A\n", &mut blocks, &mut index).unwrap();

    assert!(blocks[1].included_in_unicode_data);
    assert_eq!(blocks[1].code_point_count, 0);
    assert!(!blocks[1].large_block);
}

/// порог большого блока - строго больше 2000 кодпоинтов
#[test]
fn large_block_threshold()
{
    // ровно 2000: 4E00 + 0x7CF
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "4E00..9FFF; CJK Unified Ideographs\n",
        "@@\t4E00\tCJK Unified Ideographs\t9FFF\n",
    );

    merge_derived_names("4E00..55CF;CJK Ideograph-%\n", &mut blocks, &mut index).unwrap();

    assert_eq!(blocks[0].code_point_count, 2000);
    assert!(!blocks[0].large_block);
}

/// кодпоинт за последним блоком - нарушение грамматики листинга
#[test]
fn entry_past_last_block()
{
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "0000..007F; Basic Latin\n",
        "@@\t0000\tBasic Latin\t007F\n",
    );

    let error = merge_derived_names("10FFFD;LAST ONE\n", &mut blocks, &mut index).unwrap_err();

    assert!(matches!(error, SourceError::MalformedInput { file: "DerivedName.txt", line: 1, .. }));
}

/// перевернутый диапазон - нарушение грамматики листинга
#[test]
fn reversed_range_rejected()
{
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "4E00..9FFF; CJK Unified Ideographs\n",
        "@@\t4E00\tCJK Unified Ideographs\t9FFF\n",
    );

    let error =
        merge_derived_names("9FFF..4E00;CJK Ideograph-%\n", &mut blocks, &mut index).unwrap_err();

    assert!(matches!(error, SourceError::MalformedInput { file: "DerivedName.txt", line: 1, .. }));
}

/// комментарии и пустые строки листинга пропускаются
#[test]
fn comments_skipped()
{
    let ParsedNamesList { mut blocks, mut index } = parsed(
        "0000..007F; Basic Latin\n",
        "@@\t0000\tBasic Latin\t007F\n",
    );

    let derived = "# DerivedName-15.1.0.txt\n\
                   \n\
                   0041;LATIN CAPITAL LETTER A\n";

    merge_derived_names(derived, &mut blocks, &mut index).unwrap();

    assert_eq!(blocks[0].code_point_count, 1);
}
