use super::Config;

const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];
const FALLBACK_LOCALE: &str = "es";

/// `"es_BO.UTF-8"` -> `"es"`, `"en_US"` -> `"en"`, `"es"` stays `"es"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    lang.trim().to_lowercase()
}

fn supported(raw: &str) -> Option<String> {
    let lang = normalise_locale(raw);
    SUPPORTED_LOCALES.contains(&lang.as_str()).then_some(lang)
}

/// `LOGOGRADE_LANG` -> config value -> system `LANG` -> `"es"`.
fn detect_locale(config_locale: &str) -> String {
    if let Ok(lang) = std::env::var("LOGOGRADE_LANG")
        && let Some(lang) = supported(&lang)
    {
        return lang;
    }

    if config_locale != FALLBACK_LOCALE
        && let Some(lang) = supported(config_locale)
    {
        return lang;
    }

    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .and_then(|lang| supported(&lang))
        .unwrap_or_else(|| FALLBACK_LOCALE.into())
}

impl Config {
    pub fn apply_locale(&self) {
        let locale = detect_locale(&self.locale);
        rust_i18n::set_locale(&locale);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_env::{ENV_LOCK, EnvVarGuard};
    use super::*;

    #[test]
    fn normalise_strips_region_and_encoding() {
        assert_eq!(normalise_locale("es_BO.UTF-8"), "es");
        assert_eq!(normalise_locale("en-US"), "en");
        assert_eq!(normalise_locale("ES"), "es");
    }

    #[test]
    fn env_override_wins() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _lang = EnvVarGuard::set("LOGOGRADE_LANG", "en_GB.UTF-8");
        let _sys = EnvVarGuard::set("LANG", "es_BO.UTF-8");

        assert_eq!(detect_locale("es"), "en");
    }

    #[test]
    fn config_value_beats_system_locale() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _lang = EnvVarGuard::unset("LOGOGRADE_LANG");
        let _sys = EnvVarGuard::set("LANG", "es_BO.UTF-8");

        assert_eq!(detect_locale("en"), "en");
    }

    #[test]
    fn unsupported_system_locale_falls_back_to_spanish() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _lang = EnvVarGuard::unset("LOGOGRADE_LANG");
        let _sys = EnvVarGuard::set("LANG", "ja_JP.UTF-8");
        let _msg = EnvVarGuard::unset("LC_MESSAGES");

        assert_eq!(detect_locale("es"), "es");
    }

    #[test]
    fn system_locale_used_when_config_is_default() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _lang = EnvVarGuard::unset("LOGOGRADE_LANG");
        let _sys = EnvVarGuard::set("LANG", "en_US.UTF-8");

        assert_eq!(detect_locale("es"), "en");
    }
}
