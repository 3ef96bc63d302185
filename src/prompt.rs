// Файл: src/prompt.rs
use crate::{BooleanOp, GroupLogic, InternalOp, LogicMap};

use std::io::{self, BufRead, Write};

/// Опросить пользователя по каждой колонке: кавычки, внешний и внутренний
/// операторы. На невалидный ввод оператора — переспрашиваем.
pub fn prompt_group_settings<R, W>(
    inp: &mut R,
    out: &mut W,
    headers: &[String],
) -> io::Result<LogicMap>
where
    R: BufRead,
    W: Write,
{
    let mut settings = LogicMap::new();
    writeln!(out, "\nConfigure settings for each column:")?;

    for header in headers {
        writeln!(out, "\nColumn: {header}")?;

        write!(out, "  - Wrap terms in quotes? [y/n]: ")?;
        out.flush()?;
        let quote = read_line(inp)?.trim().eq_ignore_ascii_case("y");

        let operator = loop {
            write!(out, "  - How should this group connect to others? [AND/OR/NOT]: ")?;
            out.flush()?;
            match read_line(inp)?.parse::<BooleanOp>() {
                Ok(op) => break op,
                Err(()) => writeln!(out, "    Invalid input. Please enter AND, OR, or NOT.")?,
            }
        };

        let internal_operator = loop {
            write!(out, "  - How should values inside this group be joined? [OR/AND]: ")?;
            out.flush()?;
            match read_line(inp)?.parse::<InternalOp>() {
                Ok(op) => break op,
                Err(()) => writeln!(out, "    Invalid input. Please enter OR or AND.")?,
            }
        };

        settings.insert(
            header.clone(),
            GroupLogic {
                quote,
                operator,
                internal_operator,
            },
        );
    }
    Ok(settings)
}

/// Выбор main-группы по номеру: 0 — один combined-запрос, 1..=n — колонка.
/// Всё остальное — переспрашиваем.
pub fn select_main_group<R, W>(
    inp: &mut R,
    out: &mut W,
    headers: &[String],
) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "\nWhich column should be used to generate one query per value?")?;
    writeln!(out, "  0. Single combined query (all values together)")?;
    for (i, header) in headers.iter().enumerate() {
        writeln!(out, "  {}. {header}", i + 1)?;
    }

    loop {
        write!(out, "\nEnter your choice (number): ")?;
        out.flush()?;
        if let Ok(choice) = read_line(inp)?.trim().parse::<usize>() {
            if choice == 0 {
                return Ok(None);
            }
            if choice <= headers.len() {
                return Ok(Some(headers[choice - 1].clone()));
            }
        }
        writeln!(
            out,
            "Invalid choice. Please enter a number between 0 and {}",
            headers.len()
        )?;
    }
}

fn read_line<R: BufRead>(inp: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    let n = inp.read_line(&mut buf)?;
    if n == 0 {
        // stdin закрыли посреди диалога
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed during prompt",
        ));
    }
    Ok(buf)
}
