pub mod errors;
pub mod loader;
pub mod prompt;
pub mod query;
pub mod runmeta;
pub mod writer;

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Термы по колонкам: имя колонки -> множество уникальных термов.
/// IndexMap держит порядок колонок из CSV, BTreeSet — дедупликацию и сортировку.
pub type GroupTerms = IndexMap<String, BTreeSet<String>>;

/// Настройки логики по группам, в том же порядке колонок
pub type LogicMap = IndexMap<String, GroupLogic>;

/// Связка клаузы группы со СЛЕДУЮЩЕЙ группой в запросе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    And,
    Or,
    Not,
}

/// Связка термов ВНУТРИ одной группы (скобочной клаузы)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalOp {
    Or,
    And,
}

/// Настройки одной группы: кавычки + оба оператора
#[derive(Debug, Clone, Copy)]
pub struct GroupLogic {
    pub quote: bool,
    pub operator: BooleanOp,
    pub internal_operator: InternalOp,
}

/// Готовый запрос: label = значение main-группы, None для combined-режима
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub label: Option<String>,
    pub text: String,
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BooleanOp::And => "AND",
            BooleanOp::Or => "OR",
            BooleanOp::Not => "NOT",
        };
        f.write_str(s)
    }
}

impl FromStr for BooleanOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(BooleanOp::And),
            "OR" => Ok(BooleanOp::Or),
            "NOT" => Ok(BooleanOp::Not),
            _ => Err(()),
        }
    }
}

impl fmt::Display for InternalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InternalOp::Or => "OR",
            InternalOp::And => "AND",
        };
        f.write_str(s)
    }
}

impl FromStr for InternalOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OR" => Ok(InternalOp::Or),
            "AND" => Ok(InternalOp::And),
            _ => Err(()),
        }
    }
}
