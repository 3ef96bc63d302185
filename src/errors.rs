// Файл: src/errors.rs
use thiserror::Error;

/// Ошибки ядра. Все терминальные: ретраить нечего, запуск либо прошёл, либо нет.
#[derive(Debug, Error)]
pub enum SqgError {
    /// Ни одна кодировка из цепочки не смогла декодировать вход
    #[error("could not decode {0} with tried encodings: utf-8, utf-8-sig, windows-1252, iso-8859-15")]
    Decode(String),

    /// Группа есть в термах, но настройки логики для неё не передали — баг вызывающего
    #[error("group '{0}' present in terms but missing from logic settings")]
    Configuration(String),

    /// Запрошенной main-группы нет среди загруженных колонок
    #[error("main group '{0}' not found in group terms")]
    InvalidMainGroup(String),

    /// Во входном файле нет ни одной колонки
    #[error("no columns found in the input file")]
    EmptyInput,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SqgResult<T> = Result<T, SqgError>;
