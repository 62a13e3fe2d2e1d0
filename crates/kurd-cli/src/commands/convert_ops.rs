use kurd_core::converter::convert_with;
use kurd_core::stats::TextStatistics;

use super::read_input;

pub fn convert_cmd(text: Option<&str>, file: Option<&str>, rules: &str, json: bool, stats: bool) {
    let input = die!(read_input(text, file), "Error reading input: {}");
    let result = convert_with(&input, rules);

    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error encoding JSON: {}");
        println!("{out}");
        return;
    }

    println!("{}", result.converted);
    if stats {
        eprintln!("{}", format_stats("original", &result.original_stats));
        eprintln!("{}", format_stats("converted", &result.converted_stats));
    }
}

pub fn stats_cmd(text: Option<&str>, file: Option<&str>, json: bool) {
    let input = die!(read_input(text, file), "Error reading input: {}");
    let stats = TextStatistics::of(&input);
    if json {
        let out = die!(serde_json::to_string(&stats), "Error encoding JSON: {}");
        println!("{out}");
    } else {
        println!("{}", format_stats("text", &stats));
    }
}

pub fn format_stats(label: &str, s: &TextStatistics) -> String {
    format!(
        "{label}: chars={} words={} lines={} script_chars={}",
        s.chars, s.words, s.lines, s.script_chars
    )
}
