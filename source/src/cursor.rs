use crate::dataset::BlockEntry;

/// элемент упорядоченного списка, занимающий диапазон кодпоинтов
pub trait CodeSpan
{
    /// последний кодпоинт диапазона
    fn span_end(&self) -> u32;
}

impl CodeSpan for BlockEntry
{
    fn span_end(&self) -> u32
    {
        self.end
    }
}

/// курсор слияния двух отсортированных по кодпоинтам последовательностей:
/// продвигается вперед, пока текущий элемент лежит целиком до искомого
/// кодпоинта, и никогда не возвращается к началу списка
#[derive(Debug, Default)]
pub struct SpanCursor
{
    position: usize,
}

impl SpanCursor
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// индекс первого элемента, конец которого не меньше кодпоинта;
    /// None - кодпоинт лежит за последним элементом списка
    pub fn advance_to<T: CodeSpan>(&mut self, items: &[T], code: u32) -> Option<usize>
    {
        while let Some(item) = items.get(self.position) {
            if code <= item.span_end() {
                return Some(self.position);
            }

            self.position += 1;
        }

        None
    }
}
