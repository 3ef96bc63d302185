use sqgen::runmeta::RunMetadata;
use sqgen::writer::{append_run_metadata, write_queries};
use sqgen::{GroupTerms, LogicMap, Query};

use std::fs;
use tempfile::tempdir;

fn query(label: Option<&str>, text: &str) -> Query {
    Query {
        label: label.map(|s| s.to_string()),
        text: text.to_string(),
    }
}

#[test]
fn combined_query_is_plain_block() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("queries.txt");

    write_queries(
        &[query(None, "(red) AND (large)")],
        path.to_str().unwrap(),
        None,
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "(red) AND (large)\n\n");
}

#[test]
fn labelled_blocks_sorted_with_headers() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("queries.txt");

    // подаём в обратном порядке: writer обязан пересортировать по label
    write_queries(
        &[
            query(Some("banana"), "(banana)"),
            query(Some("apple"), "(apple)"),
        ],
        path.to_str().unwrap(),
        Some("fruit"),
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "-- fruit: apple --\n(apple)\n\n-- fruit: banana --\n(banana)\n\n"
    );
}

#[test]
fn metadata_header_written_once_across_runs() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("summary.csv");

    let terms = GroupTerms::new();
    let logic = LogicMap::new();
    let meta = RunMetadata::collect("aaaa000000", "in.csv", None, &terms, &logic, 1);

    append_run_metadata(&meta, path.to_str().unwrap()).unwrap();
    append_run_metadata(&meta, path.to_str().unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "sq_id,timestamp,input_file,main_group,group_count,terms_total,query_count,group_logic"
    );
    assert!(lines[1].starts_with("aaaa000000,"));
    assert!(lines[2].starts_with("aaaa000000,"));
}

#[test]
fn metadata_row_fields_in_order() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("summary.csv");

    let mut terms = GroupTerms::new();
    terms.insert(
        "kw".to_string(),
        ["a", "b"].iter().map(|s| s.to_string()).collect(),
    );
    let mut logic = LogicMap::new();
    logic.insert(
        "kw".to_string(),
        sqgen::GroupLogic {
            quote: false,
            operator: sqgen::BooleanOp::And,
            internal_operator: sqgen::InternalOp::Or,
        },
    );

    let meta = RunMetadata::collect("bbbb111111", "input.csv", None, &terms, &logic, 1);
    append_run_metadata(&meta, path.to_str().unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let row = content.lines().nth(1).unwrap();
    let fields: Vec<&str> = row.split(',').collect();
    assert_eq!(fields[0], "bbbb111111");
    assert_eq!(fields[2], "input.csv");
    assert_eq!(fields[3], "(combined)");
    assert_eq!(fields[4], "1"); // group_count
    assert_eq!(fields[5], "2"); // terms_total
    assert_eq!(fields[6], "1"); // query_count
    assert_eq!(fields[7], "kw:AND/OR");
}
