use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn ccsv2sql(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ccsv2sql"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ccsv2sql")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_arguments_prints_info() {
    let output = ccsv2sql(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Utility to convert a CSV file to a SQL dump."));
}

#[test]
fn test_info_flag_prints_license_banner() {
    let output = ccsv2sql(&["-i"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Copyright 2015 Sam Saint-Pettersen."));
    assert!(text.contains("Licensed under the MIT/X11 License."));
    assert!(text.contains("Use -h switch for usage information."));
}

#[test]
fn test_version_flag() {
    let output = ccsv2sql(&["-v"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(&format!("ccsv2sql {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_and_info_together_print_nothing() {
    let output = ccsv2sql(&["-v", "-i"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_non_csv_input_exits_with_one() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    fs::write(&input, "a,b\n1,2\n").unwrap();
    let out = dir.path().join("data.sql");

    let output = ccsv2sql(&["-f", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Input file is not a CSV file.\n");
    assert!(!out.exists());
}

#[test]
fn test_non_sql_output_exits_with_one() {
    let output = ccsv2sql(&["-f", "data.csv", "-o", "data.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Output file is not a SQL file.\n");
}

#[test]
fn test_out_without_file_exits_with_one() {
    let output = ccsv2sql(&["-o", "data.sql"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_converts_file_with_options() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "id|name|joined\n1|Alice|2015-06-01T10:00:00.000Z\n").unwrap();

    let output = ccsv2sql(&["-f", input.to_str().unwrap(), "-s", "|", "-d", "crm", "-n"]);
    assert_eq!(output.status.code(), Some(0));

    let sql = fs::read_to_string(dir.path().join("people.sql")).unwrap();
    assert_eq!(
        sql,
        "--!\n\
USE `crm`;\n\
DROP TABLE IF EXISTS `people`;\n\
CREATE TABLE IF NOT EXISTS `people` (\n\
`id` NUMERIC(15, 2),\n\
`name` VARCHAR(50),\n\
`joined` TIMESTAMP);\n\
\n\
INSERT INTO `people` VALUES (\n\
1,\n\
'Alice',\n\
'2015-06-01 10:00:00');\n\
\n"
    );
}

#[test]
fn test_verbose_banner() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("t.csv");
    fs::write(&input, "a\n1\n").unwrap();
    let input = input.to_str().unwrap().to_string();

    let output = ccsv2sql(&["-f", &input, "-l"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Generating SQL dump file: "));
}

#[test]
fn test_schema_error_is_reported_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    fs::write(&input, "a,b\n").unwrap();

    let output = ccsv2sql(&["-f", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no data rows"));
    assert!(!dir.path().join("empty.sql").exists());
}

#[test]
fn test_rejects_multi_character_separator() {
    let output = ccsv2sql(&["-f", "data.csv", "-s", "::"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_short_first_row_reports_column_mismatch() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("short.csv");
    fs::write(&input, "a,b\n1\n").unwrap();

    let output = ccsv2sql(&["-f", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Column count mismatch: 2 header fields, 1 values in first row"));
    assert!(!dir.path().join("short.sql").exists());
}
