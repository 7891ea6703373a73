/// Универсальные утилиты для работы со списками (поиск, усечение текста)

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    ///
    /// `filter` приходит уже в нижнем регистре.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring test used by [`Searchable`] implementations
pub fn contains_ci(haystack: &str, filter_lower: &str) -> bool {
    haystack.to_lowercase().contains(filter_lower)
}

/// Фильтрует список по поисковому запросу, сохраняя исходный порядок
///
/// Пустой запрос возвращает весь список. Запрос не обрезается по пробелам.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// First `max_chars` characters of `text` followed by `...`.
///
/// The ellipsis is appended even when nothing was cut, matching how catalog
/// cards have always looked.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
