use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiscoreConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub language: LanguageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_dir")]
    pub dir: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_input_dir(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("files")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesConfig {
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    pub model: Option<PathBuf>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            model: None,
        }
    }
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("words.txt")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: ReportFormat::default(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("results.csv")
}

/// Lexical conventions of the scanned source language. Defaults describe Python.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_function_keyword")]
    pub function_keyword: String,
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            function_keyword: default_function_keyword(),
            comment_marker: default_comment_marker(),
            keywords: default_keywords(),
        }
    }
}

impl LanguageConfig {
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword == token)
    }

    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

fn default_extension() -> String {
    "py".to_string()
}

fn default_function_keyword() -> String {
    "def".to_string()
}

fn default_comment_marker() -> String {
    "#".to_string()
}

pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

fn default_keywords() -> Vec<String> {
    PYTHON_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
