/// состоит-ли строка только из шестнадцатеричных цифр верхнего регистра
pub fn is_code_point(text: &str) -> bool
{
    !text.is_empty() && text.bytes().all(|b| matches!(b, b'0' ..= b'9' | b'A' ..= b'F'))
}

/// разбор кодпоинта: шестнадцатеричное число в верхнем регистре
pub fn parse_code_point(text: &str) -> Option<u32>
{
    match is_code_point(text) {
        true => u32::from_str_radix(text, 16).ok(),
        false => None,
    }
}

/// разбор одиночного кодпоинта или диапазона `START..END`;
/// одиночный кодпоинт - диапазон из единственного элемента,
/// перевернутый диапазон (START > END) - вне грамматики
pub fn parse_code_point_range(text: &str) -> Option<(u32, u32)>
{
    match text.split_once("..") {
        Some((start, end)) => {
            let start = parse_code_point(start)?;
            let end = parse_code_point(end)?;

            match start <= end {
                true => Some((start, end)),
                false => None,
            }
        }
        None => {
            let code = parse_code_point(text)?;

            Some((code, code))
        }
    }
}
