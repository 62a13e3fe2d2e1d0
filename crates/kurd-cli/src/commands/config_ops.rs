use std::fs;

pub fn settings_export() {
    print!("{}", kurd_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kurd_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: history.capacity={}, history.min_record_chars={}, rules.default={}",
        s.history.capacity,
        s.history.min_record_chars,
        s.rules.default_id()
    );
}

/// Install a settings file for the rest of the process (`--settings`).
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        kurd_core::settings::init_custom(content),
        "Error loading {file}: {}"
    );
}
