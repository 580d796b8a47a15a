use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = ["LOGOGRADE_API_KEY", "GEMINI_API_KEY", "API_KEY"]
            .into_iter()
            .find_map(|name| std::env::var(name).ok().filter(|key| !key.trim().is_empty()))
        {
            self.api_key = Some(key.trim().to_string());
        }

        if let Ok(model) = std::env::var("LOGOGRADE_MODEL")
            && !model.is_empty()
        {
            self.model = model;
        }

        if let Ok(data_dir) = std::env::var("LOGOGRADE_DATA_DIR")
            && !data_dir.is_empty()
        {
            self.data_dir = Some(data_dir);
        }

        if let Ok(temp_str) = std::env::var("LOGOGRADE_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.temperature = temp;
        }
    }
}
