use crate::types::report::FileReport;
use crate::types::scoring::Mean;

pub const HEADER: [&str; 5] = ["NAME", "VAR", "FUNC", "COMM", "UND"];

/// Two-decimal rendering; undefined metrics render as `NaN`.
pub fn format_metric(value: Mean) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "NaN".to_string(),
    }
}

pub fn to_csv(files: &[FileReport]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for file in files {
        writer.write_record([
            file.name.clone(),
            format_metric(file.var),
            format_metric(file.func),
            format_metric(file.comm),
            format_metric(file.und),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
