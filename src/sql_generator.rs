use crate::type_inference::Column;

/// wraps an identifier in backticks. names are taken as-is, whatever they contain.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name)
}

pub fn use_database_sql(db: &str) -> String {
    format!("USE {};", quote_identifier(db))
}

pub fn drop_table_sql(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS {};", quote_identifier(table_name))
}

/// generates a `create table` statement; the closing `);` follows the last column directly.
pub fn create_table_sql(table_name: &str, columns: &[Column]) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", quote_identifier(table_name));

    let definitions: Vec<String> = columns
        .iter()
        .map(|column| format!("{} {}", quote_identifier(&column.name), column.sql_type))
        .collect();

    sql.push_str(&definitions.join(",\n"));
    sql.push_str(");");

    sql
}

/// wraps an already rendered literal list in a single-row insert.
pub fn insert_sql(table_name: &str, literals: &str) -> String {
    format!("INSERT INTO {} VALUES (\n{});", quote_identifier(table_name), literals)
}
