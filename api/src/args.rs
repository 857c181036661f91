use clap::{Args as ClapArgs, Parser};
use recipehub_core::domain::common::{RecipeHubConfig, SpoonacularConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipehub", version, about = "Recipe discovery API backed by Spoonacular")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub spoonacular: SpoonacularArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SpoonacularArgs {
    #[arg(long = "spoonacular-api-key", env = "SPOONACULAR_API_KEY")]
    pub api_key: String,

    #[arg(
        long = "spoonacular-base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = "https://api.spoonacular.com"
    )]
    pub base_url: String,

    #[arg(long = "spoonacular-timeout-secs", env = "SPOONACULAR_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Recipes requested per ingredient search
    #[arg(long = "spoonacular-result-count", env = "SPOONACULAR_RESULT_COUNT", default_value_t = 20)]
    pub result_count: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// JSON file for the pantry store. Omit to keep everything in memory.
    #[arg(long = "storage-path", env = "STORAGE_PATH")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for RecipeHubConfig {
    fn from(args: Args) -> Self {
        Self {
            spoonacular: SpoonacularConfig {
                api_key: args.spoonacular.api_key,
                base_url: args.spoonacular.base_url,
                timeout_secs: args.spoonacular.timeout_secs,
                result_count: args.spoonacular.result_count,
            },
            storage: StorageConfig {
                path: args.storage.path,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_convert_into_core_config() {
        let args = Args::parse_from([
            "recipehub",
            "--spoonacular-api-key",
            "secret",
            "--spoonacular-result-count",
            "5",
            "--storage-path",
            "/tmp/pantry.json",
        ]);

        let config = RecipeHubConfig::from(args);

        assert_eq!(config.spoonacular.api_key, "secret");
        assert_eq!(config.spoonacular.result_count, 5);
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/pantry.json"));
    }
}
