use std::fs;

use kurd_core::converter::transliterate;
use kurd_core::history::{now_millis, HistoryLog};
use kurd_core::rules::RuleSetId;

/// Convert each line and offer it to `log`; returns how many were recorded.
pub fn replay<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    rules: RuleSetId,
    log: &mut HistoryLog,
) -> usize {
    let table = rules.rule_set();
    let mut recorded = 0;
    for line in lines {
        let result = transliterate(line, table);
        if log.record_conversion(&result, now_millis()).is_some() {
            recorded += 1;
        }
    }
    recorded
}

/// Replay a file of inputs (one per line) through a fresh history log and
/// print what it retains, newest first.
pub fn history_cmd(file: &str, rules: &str, json: bool) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mut log = HistoryLog::new();
    let total = content.lines().count();
    let recorded = replay(content.lines(), RuleSetId::select(rules), &mut log);

    if json {
        for entry in log.entries() {
            let line = die!(serde_json::to_string(entry), "Error encoding JSON: {}");
            println!("{line}");
        }
        return;
    }

    println!(
        "{total} lines, {recorded} recorded, {} kept (capacity {})",
        log.len(),
        log.capacity()
    );
    for (i, entry) in log.entries().enumerate() {
        println!(
            "#{:>2} [{}] {} → {}",
            i + 1,
            entry.rule_set,
            entry.original,
            entry.converted
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_short_lines() {
        let mut log = HistoryLog::new();
        let recorded = replay(["ab", "", "long enough line"], RuleSetId::Pro, &mut log);
        assert_eq!(recorded, 1);
        assert_eq!(log.get(0).unwrap().original, "long enough line");
    }

    #[test]
    fn test_replay_keeps_newest_ten() {
        let lines: Vec<String> = (0..15).map(|i| format!("line number {i}")).collect();
        let mut log = HistoryLog::new();
        let recorded = replay(lines.iter().map(String::as_str), RuleSetId::Standard, &mut log);
        assert_eq!(recorded, 15);
        assert_eq!(log.len(), 10);
        assert_eq!(log.get(0).unwrap().original, "line number 14");
        assert_eq!(log.get(9).unwrap().original, "line number 5");
        assert!(log.entries().all(|e| e.rule_set == "standard"));
    }
}
