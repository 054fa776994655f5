use crate::types::report::FileReport;

pub fn to_json(files: &[FileReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(files)
}
