use logograde::config::Config;

#[test]
fn minimal_config_deserializes_with_defaults() {
    let toml = r#"
api_key = "abc"
model = "gemini-2.5-pro"
"#;

    let parsed: Config = toml::from_str(toml).expect("minimal config should deserialize");

    assert_eq!(parsed.api_key.as_deref(), Some("abc"));
    assert_eq!(parsed.model, "gemini-2.5-pro");
    assert_eq!(parsed.report.locale, "es_BO");
    assert_eq!(parsed.report.date_format, "%-d de %B de %Y, %H:%M");
    assert_eq!(parsed.media.max_file_size_mb, 20);
    assert_eq!(parsed.request_timeout_secs, 120);
}

#[test]
fn full_config_round_trips_through_toml() {
    let toml = r#"
model = "gemini-2.5-flash"
temperature = 0.2
api_base_url = "http://127.0.0.1:9000"
request_timeout_secs = 30
data_dir = "/srv/notas"
locale = "en"

[report]
locale = "en_US"
date_format = "%B %-d, %Y %H:%M"

[media]
max_file_size_mb = 5

[rubric]
template_path = "/srv/rubrica.tera"
"#;

    let parsed: Config = toml::from_str(toml).expect("full config should deserialize");
    parsed.validate().expect("full config should validate");

    let reparsed: Config = toml::from_str(&toml::to_string_pretty(&parsed).unwrap()).unwrap();
    assert_eq!(reparsed.data_dir(), std::path::PathBuf::from("/srv/notas"));
    assert_eq!(reparsed.report, parsed.report);
    assert_eq!(reparsed.media, parsed.media);
    assert_eq!(reparsed.rubric, parsed.rubric);
    assert_eq!(reparsed.locale, "en");
}
