// Файл: src/loader.rs
use crate::errors::{SqgError, SqgResult};
use crate::GroupTerms;

use encoding_rs::{Encoding, ISO_8859_15, UTF_8, WINDOWS_1252};
use std::collections::BTreeSet;
use std::fs;

/// Цепочка кодировок: строгий UTF-8 (с отрезанием BOM = utf-8-sig), затем
/// два однобайтовых legacy-варианта. Однобайтовые принимают любые байты,
/// так что до Decode-ошибки на практике не доходит.
const ENCODINGS: &[&Encoding] = &[UTF_8, WINDOWS_1252, ISO_8859_15];

/// Сколько символов читаем для сниффинга разделителя
const SNIFF_WINDOW: usize = 2048;

const DELIMITERS: &[u8] = b",;\t|";

/// Прочитать CSV и сгруппировать термы по колонкам.
///
/// Порядок колонок сохраняется как в файле; значения ячеек триммятся,
/// пустые пропускаются, дубликаты схлопываются. Файл без заголовков ->
/// EmptyInput, файл не найден -> Io(NotFound).
pub fn read_csv_terms(path: &str) -> SqgResult<GroupTerms> {
    let bytes = fs::read(path)?;
    let text = decode_bytes(&bytes).ok_or_else(|| SqgError::Decode(path.to_string()))?;
    let delimiter = sniff_delimiter(&text);
    parse_terms(&text, delimiter)
}

fn decode_bytes(bytes: &[u8]) -> Option<String> {
    // BOM срезаем заранее: вариант «UTF-8 с сигнатурой»
    let body = bytes.strip_prefix(b"\xef\xbb\xbf".as_slice()).unwrap_or(bytes);
    for enc in ENCODINGS {
        if let Some(s) = enc.decode_without_bom_handling_and_without_replacement(body) {
            return Some(s.into_owned());
        }
    }
    None
}

/// Выбрать разделитель по первой непустой строке сэмпла: берём кандидата
/// с максимальным числом вхождений, при нуле/равенстве — запятую.
fn sniff_delimiter(text: &str) -> u8 {
    let sample: String = text.chars().take(SNIFF_WINDOW).collect();
    let line = sample
        .lines()
        .find(|l| !l.trim().is_empty())
        .unwrap_or_default();

    let mut best = b',';
    let mut best_count = 0usize;
    for &cand in DELIMITERS {
        let count = line.bytes().filter(|&b| b == cand).count();
        if count > best_count {
            best = cand;
            best_count = count;
        }
    }
    best
}

fn parse_terms(text: &str, delimiter: u8) -> SqgResult<GroupTerms> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SqgError::EmptyInput);
    }

    // Каждая колонка получает запись сразу, даже если термов не окажется
    let mut groups = GroupTerms::new();
    for header in headers.iter() {
        groups.insert(header.trim().to_string(), BTreeSet::new());
    }

    for record in reader.records() {
        let record = record?;
        for (i, header) in headers.iter().enumerate() {
            let Some(cell) = record.get(i) else { continue };
            let term = cell.trim();
            if term.is_empty() {
                continue;
            }
            if let Some(set) = groups.get_mut(header.trim()) {
                set.insert(term.to_string());
            }
        }
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_delimiter_variants() {
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3\n"), b',');
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3\n"), b';');
        assert_eq!(sniff_delimiter("a\tb\tc\n"), b'\t');
        assert_eq!(sniff_delimiter("a|b|c\n"), b'|');
        // одна колонка: разделителей нет, дефолт — запятая
        assert_eq!(sniff_delimiter("keyword\nfoo\n"), b',');
    }

    #[test]
    fn test_decode_utf8_and_bom() {
        assert_eq!(decode_bytes("a,b\n".as_bytes()).as_deref(), Some("a,b\n"));
        assert_eq!(
            decode_bytes(b"\xef\xbb\xbfa,b\n").as_deref(),
            Some("a,b\n")
        );
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0xE9 — невалидный UTF-8, но 'é' в windows-1252
        let decoded = decode_bytes(b"caf\xe9").unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_parse_keeps_column_order_and_dedups() {
        let groups = parse_terms("color,size\nred,large\nblue,\n red ,\n", b',').unwrap();
        let cols: Vec<&String> = groups.keys().collect();
        assert_eq!(cols, ["color", "size"]);
        assert_eq!(
            groups["color"].iter().collect::<Vec<_>>(),
            ["blue", "red"]
        );
        assert_eq!(groups["size"].iter().collect::<Vec<_>>(), ["large"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_terms("", b','), Err(SqgError::EmptyInput)));
    }
}
