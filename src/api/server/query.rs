#[derive(Debug, Deserialize)]
struct ExportQuery {
    #[serde(alias = "format", alias = "Format")]
    format: Option<String>,
}
