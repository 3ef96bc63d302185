// Файл: src/writer.rs
use crate::errors::SqgResult;
use crate::runmeta::RunMetadata;
use crate::Query;

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Записать запросы в текстовый файл, по блоку на запрос.
///
/// Блоки идут в порядке сортировки по (label, text). С main-группой блок
/// получает заголовок `-- <group>: <label> --`, без неё — только текст.
pub fn write_queries(queries: &[Query], path: &str, main_group: Option<&str>) -> SqgResult<()> {
    let mut sorted: Vec<&Query> = queries.iter().collect();
    sorted.sort_by(|a, b| (&a.label, &a.text).cmp(&(&b.label, &b.text)));

    let mut out = BufWriter::new(File::create(path)?);
    for query in sorted {
        match (main_group, &query.label) {
            (Some(group), Some(label)) => {
                writeln!(out, "-- {group}: {label} --")?;
                writeln!(out, "{}\n", query.text)?;
            }
            _ => writeln!(out, "{}\n", query.text)?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Дописать строку сводки запуска в metadata-CSV.
/// Заголовок пишем только если файла ещё не было; строки копятся между запусками.
pub fn append_run_metadata(meta: &RunMetadata, path: &str) -> SqgResult<()> {
    let exists = Path::new(path).exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(!exists)
        .from_writer(file);
    writer.serialize(meta)?;
    writer.flush()?;
    Ok(())
}
