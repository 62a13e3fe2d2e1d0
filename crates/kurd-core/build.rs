fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml("src/rules/pro.toml", include_str!("src/rules/pro.toml"));
    validate_toml(
        "src/rules/standard.toml",
        include_str!("src/rules/standard.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
