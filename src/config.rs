use std::env;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub api_token: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub supabase: Option<SupabaseConfig>,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")?;
        let api_token = env::var("API_TOKEN")?;
        let gemini_api_key = env::var("GEMINI_API_KEY")?;
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let supabase = match (env::var("SUPABASE_URL"), env::var("SUPABASE_KEY")) {
            (Ok(url), Ok(api_key)) if !url.trim().is_empty() && !api_key.trim().is_empty() => {
                Some(SupabaseConfig { url, api_key })
            }
            _ => None,
        };

        Ok(Self {
            port,
            api_token,
            gemini_api_key,
            gemini_model,
            supabase,
        })
    }
}
