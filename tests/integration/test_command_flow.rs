// コマンド処理からメモリ上の表までを通した統合テスト
use sheet_shell::file_ops::memory::MemoryFileOperations;
use sheet_shell::shell::{tokenize, SessionSummary};
use sheet_shell::{CommandProcessor, DefaultExpressionProcessor, Shell};
use std::io::Cursor;

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{staff_operations, CapturingReporter};

type TestProcessor =
    CommandProcessor<MemoryFileOperations, DefaultExpressionProcessor, CapturingReporter>;

fn processor(ops: MemoryFileOperations) -> (TestProcessor, CapturingReporter) {
    let reporter = CapturingReporter::new();
    let processor = CommandProcessor::new(ops, DefaultExpressionProcessor::new(), reporter.clone());
    (processor, reporter)
}

fn run(processor: &TestProcessor, line: &str) -> bool {
    processor.process_command(&tokenize(line))
}

#[test]
fn test_get_reports_each_field() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops);

    assert!(run(&processor, "get 1-2 {部署=営業} in tokyo.xlsx"));

    assert_eq!(
        reporter.lines(),
        vec![
            "search - [1, 2]".to_string(),
            "search 部署 [営業]".to_string(),
        ]
    );
}

#[test]
fn test_update_in_scope_only() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops.clone());

    assert!(run(&processor, "update {部署=営業} to 企画 in tokyo.xlsx"));

    assert!(reporter.lines_starting_with("error").is_empty());
    let tokyo = ops.table("tokyo.xlsx").unwrap();
    assert_eq!(tokyo.rows[0][2], "企画");
    assert_eq!(tokyo.rows[2][2], "企画");
    // 作用域外のファイルは変わらない
    assert_eq!(ops.table("osaka.xlsx").unwrap().rows[1][2], "営業");
}

#[test]
fn test_update_except_scope() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, _reporter) = processor(ops.clone());

    assert!(run(&processor, "update {部署=営業} to 企画 except tokyo.xlsx"));

    assert_eq!(ops.table("tokyo.xlsx").unwrap().rows[0][2], "営業");
    assert_eq!(ops.table("osaka.xlsx").unwrap().rows[1][2], "企画");
}

#[test]
fn test_copy_range_of_rows() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops.clone());

    assert!(run(&processor, "copy ID 1-2 to 8-9 in tokyo.xlsx"));

    assert_eq!(
        reporter.lines(),
        vec!["copy 1 8".to_string(), "copy 2 9".to_string()]
    );
    let tokyo = ops.table("tokyo.xlsx").unwrap();
    assert_eq!(tokyo.rows.len(), 5);
    assert_eq!(tokyo.rows[3], vec!["8", "田中", "営業"]);
    assert_eq!(tokyo.rows[4], vec!["9", "佐藤", "開発"]);
    assert_eq!(ops.table("osaka.xlsx").unwrap().rows.len(), 2);
}

#[test]
fn test_copy_count_mismatch_leaves_tables_untouched() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops.clone());

    assert!(run(&processor, "copy ID 1-3 to 8-9 in tokyo.xlsx"));

    assert_eq!(reporter.lines_starting_with("error").len(), 1);
    assert!(reporter.lines_starting_with("copy").is_empty());
    assert_eq!(ops.table("tokyo.xlsx").unwrap().rows.len(), 3);
}

#[test]
fn test_copy_missing_source_is_reported_and_shell_continues() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops);

    assert!(run(&processor, "copy ID 404 to 5 in tokyo.xlsx"));

    let errors = reporter.lines_starting_with("error");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("404"));
}

#[test]
fn test_invalid_range_warns_and_searches_literal() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops);

    assert!(run(&processor, "get {名前=田中-佐藤}"));

    let lines = reporter.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("warning"));
    assert_eq!(lines[1], "search 名前 [田中-佐藤]");
}

#[test]
fn test_shell_session_over_memory_tables() {
    let (_temp_dir, ops) = staff_operations();
    let (processor, reporter) = processor(ops.clone());
    let shell = Shell::new(processor, "sheet> ");

    let input = Cursor::new(
        "help\n\
         update 2 to 20 in osaka.xlsx\n\
         get 20 in osaka.xlsx\n\
         clean\n\
         exit\n\
         update 1 to 100 in osaka.xlsx\n",
    );
    let mut output = Vec::new();
    let summary = shell.run(input, &mut output).unwrap();

    assert_eq!(summary, SessionSummary { commands: 5, stopped: true });
    assert_eq!(reporter.lines().first().map(String::as_str), Some("help"));
    assert_eq!(reporter.lines().last().map(String::as_str), Some("clear"));
    let osaka = ops.table("osaka.xlsx").unwrap();
    assert_eq!(osaka.rows[0][0], "1");
    assert_eq!(osaka.rows[1][0], "20");
}
