use super::scoring::Mean;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub var: Mean,
    pub func: Mean,
    pub comm: Mean,
    pub und: Mean,
}

impl FileReport {
    pub fn undefined_metrics(&self) -> Vec<&'static str> {
        [
            ("VAR", self.var),
            ("FUNC", self.func),
            ("COMM", self.comm),
            ("UND", self.und),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(label, _)| label)
        .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
}
