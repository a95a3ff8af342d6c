//! mcp-space: MCP Space social-posting tools over stdio

use clap::Parser;
use space_server::{build_registry, handler::to_mcp_tool, run_stdio};
use space_utils::SpaceConfig;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "mcp-space")]
#[command(version, about = "MCP server exposing MCP Space posting tools over stdio", long_about = None)]
struct Args {
    /// Backend base URL (overrides API_BASE_URL)
    #[arg(long)]
    api_base_url: Option<String>,

    /// Bearer token (overrides API_TOKEN)
    #[arg(long)]
    api_token: Option<String>,

    /// Refuse to start without an API token
    #[arg(long)]
    require_token: bool,

    /// Hide the optional imageUrl argument on post and reply tools
    #[arg(long)]
    no_image_url: bool,

    /// Do not offer the update-username tool
    #[arg(long)]
    no_update_username: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Print the tool catalog as JSON and exit
    #[arg(long)]
    list_tools: bool,
}

impl Args {
    fn apply(&self, config: &mut SpaceConfig) {
        if let Some(url) = &self.api_base_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(token) = &self.api_token {
            config.api_token.clone_from(token);
        }
        if self.no_image_url {
            config.allow_image_url = false;
        }
        if self.no_update_username {
            config.enable_update_username = false;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is the MCP channel.
    match &args.log_level {
        Some(level) => space_utils::init_tracing_with_level(level),
        None => space_utils::init_tracing(),
    }

    SpaceConfig::load_dotenv();
    let mut config = SpaceConfig::from_env()?;
    args.apply(&mut config);

    for diagnostic in config.check(args.require_token)? {
        warn!("{diagnostic}");
    }

    let registry = build_registry(&config);

    if args.list_tools {
        let tools = registry
            .list_tools()
            .iter()
            .map(|tool| to_mcp_tool(tool.as_ref()))
            .collect::<serde_json::Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    info!("Starting mcp-space against {}", config.api_base_url);
    run_stdio(registry).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_environment() {
        let args = Args::parse_from([
            "mcp-space",
            "--api-base-url",
            "http://localhost:3000/api",
            "--api-token",
            "cli-token",
            "--no-image-url",
        ]);

        let mut config = SpaceConfig {
            api_token: "env-token".to_string(),
            ..SpaceConfig::default()
        };
        args.apply(&mut config);

        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.api_token, "cli-token");
        assert!(!config.allow_image_url);
        assert!(config.enable_update_username);
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = Args::parse_from(["mcp-space"]);
        let mut config = SpaceConfig::default();
        args.apply(&mut config);

        assert_eq!(config, SpaceConfig::default());
        assert!(args.log_level.is_none());
        assert!(!args.require_token);
    }

    #[test]
    fn test_explicit_log_level() {
        let args = Args::parse_from(["mcp-space", "--log-level", "debug"]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
