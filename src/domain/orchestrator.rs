#[derive(Debug, Clone)]
pub enum OrchestratorMode {
    Csv { file_path: String },
}
