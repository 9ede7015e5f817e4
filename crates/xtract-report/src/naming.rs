/// File name used when none is given.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "output.csv";

/// Normalize a user-supplied output name.
///
/// Empty or missing names fall back to [`DEFAULT_OUTPUT_FILE_NAME`]; names
/// without a `.csv` suffix get one appended.
pub fn output_file_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        None | Some("") => DEFAULT_OUTPUT_FILE_NAME.to_string(),
        Some(name) if name.ends_with(".csv") => name.to_string(),
        Some(name) => format!("{name}.csv"),
    }
}
