// Файл: src/runmeta.rs
use crate::{GroupTerms, LogicMap};

use serde::Serialize;
use uuid::Uuid;

/// Длина короткого идентификатора запуска (hex-символы)
const SQ_ID_LEN: usize = 10;

/// Сводка одного запуска, одна строка в metadata-CSV.
/// Порядок полей = порядок колонок в файле.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub sq_id: String,
    pub timestamp: String,
    pub input_file: String,
    pub main_group: String,
    pub group_count: usize,
    pub terms_total: usize,
    pub query_count: usize,
    pub group_logic: String,
}

impl RunMetadata {
    pub fn collect(
        sq_id: &str,
        input_file: &str,
        main_group: Option<&str>,
        group_terms: &GroupTerms,
        group_logic: &LogicMap,
        query_count: usize,
    ) -> Self {
        // Сводка операторов: только не-main группы, в порядке колонок
        let logic_summary = group_terms
            .keys()
            .filter(|g| Some(g.as_str()) != main_group)
            .filter_map(|g| {
                group_logic
                    .get(g.as_str())
                    .map(|l| format!("{g}:{}/{}", l.operator, l.internal_operator))
            })
            .collect::<Vec<_>>()
            .join("; ");

        RunMetadata {
            sq_id: sq_id.to_string(),
            timestamp: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            input_file: input_file.to_string(),
            main_group: main_group.unwrap_or("(combined)").to_string(),
            group_count: group_terms.len(),
            terms_total: group_terms.values().map(|t| t.len()).sum(),
            query_count,
            group_logic: logic_summary,
        }
    }
}

/// Короткий непрозрачный идентификатор запуска: 10 hex-символов из
/// случайного UUID. Коллизии в рамках сессии практически исключены.
pub fn generate_sq_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..SQ_ID_LEN].to_string()
}
