/// Runtime configuration for a curation run, resolved from the environment.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Cloud completion credential. Its presence selects the cloud backend.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Full endpoint URL of the local model server's generate API.
    pub local_model_url: String,
    pub local_model_name: String,
    pub ai_request_timeout_secs: u64,
    /// How many posts to load from the store per keyword.
    pub post_fetch_limit: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("local_model_url", &self.local_model_url)
            .field("local_model_name", &self.local_model_name)
            .field("ai_request_timeout_secs", &self.ai_request_timeout_secs)
            .field("post_fetch_limit", &self.post_fetch_limit)
            .finish()
    }
}
