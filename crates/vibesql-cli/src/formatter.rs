use prettytable::{Cell, Row, Table};
use vibesql_metadata::ResultTable;
use vibesql_types::SqlValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Option<Self> {
        match format.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Renders metadata result tables
pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        ResultFormatter { format }
    }

    pub fn render(&self, result: &ResultTable) -> String {
        match self.format {
            OutputFormat::Table => render_table(result),
            OutputFormat::Json => render_json(result),
            OutputFormat::Csv => render_csv(result),
        }
    }

    pub fn print_result(&self, result: &ResultTable) {
        print!("{}", self.render(result));
        if self.format == OutputFormat::Table {
            println!("{} rows", result.row_count());
        }
    }
}

fn render_table(result: &ResultTable) -> String {
    let mut table = Table::new();

    // Add header
    let header_cells: Vec<Cell> = result.column_names().iter().map(|col| Cell::new(col)).collect();
    table.set_titles(Row::new(header_cells));

    // Add rows
    for row in result.rows() {
        let cells: Vec<Cell> = row.iter().map(|val| Cell::new(&val.to_string())).collect();
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

fn json_value(value: &SqlValue) -> serde_json::Value {
    match value {
        SqlValue::Null => serde_json::Value::Null,
        SqlValue::Boolean(b) => serde_json::Value::Bool(*b),
        other => match other.as_i64() {
            Some(n) => serde_json::Value::from(n),
            None => serde_json::Value::String(other.to_string()),
        },
    }
}

fn render_json(result: &ResultTable) -> String {
    let names = result.column_names();
    let json_rows: Vec<serde_json::Value> = result
        .rows()
        .iter()
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = names
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), json_value(value)))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();

    let mut output = serde_json::to_string_pretty(&json_rows).unwrap_or_else(|_| "[]".to_string());
    output.push('\n');
    output
}

fn render_csv(result: &ResultTable) -> String {
    let mut output = String::new();
    let header: Vec<String> = result.column_names().iter().map(|name| escape_csv_value(name)).collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for row in result.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|value| if value.is_null() { String::new() } else { escape_csv_value(&value.to_string()) })
            .collect();
        output.push_str(&line.join(","));
        output.push('\n');
    }
    output
}

fn escape_csv_value(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
