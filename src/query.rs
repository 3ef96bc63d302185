// Файл: src/query.rs
use crate::errors::{SqgError, SqgResult};
use crate::{GroupTerms, InternalOp, LogicMap, Query};

/// Отформатировать один терм: кавычки принудительно или при пробеле внутри.
/// Вложенные кавычки НЕ экранируем — правила экранирования зависят от бэкенда.
pub fn format_term(term: &str, quote: bool) -> String {
    let term = term.trim();
    if term.is_empty() {
        return String::new();
    }
    if quote || term.contains(' ') {
        format!("\"{term}\"")
    } else {
        term.to_string()
    }
}

/// Собрать скобочную клаузу группы: пустые термы отбрасываем, остальные
/// сортируем по возрастанию (гарантия детерминизма) и соединяем оператором.
/// Пустая группа -> пустая строка без скобок; одиночный терм -> `(x)`.
pub fn format_group<'a, I>(terms: I, quote: bool, internal_op: InternalOp) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut items: Vec<&str> = terms
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if items.is_empty() {
        return String::new();
    }
    items.sort_unstable();

    let joined = items
        .iter()
        .map(|t| format_term(t, quote))
        .collect::<Vec<_>>()
        .join(&format!(" {internal_op} "));
    format!("({joined})")
}

/// Один combined-запрос из всех групп.
///
/// Группы идут в порядке колонок входного CSV (порядок IndexMap). Пустые
/// группы пропускаются целиком: ни клаузы, ни оператора. Каждая группа кроме
/// последней тянет за собой свой `operator`, последняя — нет.
pub fn build_query(group_terms: &GroupTerms, group_logic: &LogicMap) -> SqgResult<String> {
    let items: Vec<_> = group_terms
        .iter()
        .filter(|(_, terms)| !terms.is_empty())
        .collect();

    let mut parts = Vec::with_capacity(items.len());
    for (i, (group, terms)) in items.iter().enumerate() {
        let logic = group_logic
            .get(group.as_str())
            .ok_or_else(|| SqgError::Configuration((*group).clone()))?;
        let clause = format_group(
            terms.iter().map(String::as_str),
            logic.quote,
            logic.internal_operator,
        );
        if i + 1 < items.len() {
            parts.push(format!("{clause} {}", logic.operator));
        } else {
            parts.push(clause);
        }
    }
    Ok(parts.join(" "))
}

/// Fan-out: один запрос на каждое уникальное значение main-группы.
///
/// Остальные непустые группы — общий «статический» префикс, в том же порядке,
/// что и в combined-режиме, каждая со своим оператором. Значение main-группы
/// подставляется последним как одиночное множество, без хвостового оператора.
/// Значения идут по возрастанию (BTreeSet), по одному запросу на значение.
pub fn build_queries_by_main_group(
    group_terms: &GroupTerms,
    group_logic: &LogicMap,
    main_group: &str,
) -> SqgResult<Vec<Query>> {
    let main_values = group_terms
        .get(main_group)
        .ok_or_else(|| SqgError::InvalidMainGroup(main_group.to_string()))?;

    // Пустая main-группа — ноль запросов, не ошибка
    if main_values.is_empty() {
        return Ok(Vec::new());
    }

    let mut static_parts = Vec::new();
    for (group, terms) in group_terms.iter() {
        if group == main_group || terms.is_empty() {
            continue;
        }
        let logic = group_logic
            .get(group.as_str())
            .ok_or_else(|| SqgError::Configuration(group.clone()))?;
        let clause = format_group(
            terms.iter().map(String::as_str),
            logic.quote,
            logic.internal_operator,
        );
        static_parts.push(format!("{clause} {}", logic.operator));
    }

    let main_logic = group_logic
        .get(main_group)
        .ok_or_else(|| SqgError::Configuration(main_group.to_string()))?;

    let mut queries = Vec::with_capacity(main_values.len());
    for val in main_values {
        let mut parts = static_parts.clone();
        parts.push(format_group(
            std::iter::once(val.as_str()),
            main_logic.quote,
            main_logic.internal_operator,
        ));
        queries.push(Query {
            label: Some(val.clone()),
            text: parts.join(" "),
        });
    }
    Ok(queries)
}
