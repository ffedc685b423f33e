//! Per-stage pipeline configuration

/// Fetch stage configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// API base endpoint (e.g. `https://api.github.com`)
    pub api_endpoint: String,
    /// Path appended to the endpoint (e.g. `/users/octocat`)
    pub api_path: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "http://webapibrt.rio.rj.gov.br/api/v1".to_string(),
            api_path: "/brt".to_string(),
        }
    }
}

/// Tabulate stage configuration
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Payload key holding the array to tabulate
    pub data_key: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            data_key: "veiculos".to_string(),
        }
    }
}

/// Write stage configuration
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Output file name; ".csv" is appended when missing
    pub output_filename: String,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            output_filename: "veiculos".to_string(),
        }
    }
}

/// Full pipeline configuration, one section per stage.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub fetch: FetchConfig,
    pub table: TableConfig,
    pub write: WriteConfig,
}
