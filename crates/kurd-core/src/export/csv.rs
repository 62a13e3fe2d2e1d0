use std::borrow::Cow;

use super::rows::aligned_rows;
use super::ExportRequest;

pub(super) const HEADER: [&str; 6] = [
    "Index",
    "Original",
    "Converted",
    "CharCountOriginal",
    "CharCountConverted",
    "MappingType",
];

/// RFC 4180 quoting: wrap in quotes when the field contains a delimiter,
/// a quote or a line break; double embedded quotes.
fn field(s: &str) -> Cow<'_, str> {
    if s.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

pub(super) fn render(req: &ExportRequest<'_>) -> Vec<u8> {
    let mut out = HEADER.join(",");
    out.push('\n');
    let mapping_type = field(req.rule_set);
    for row in aligned_rows(req.original, req.converted) {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            row.index,
            field(row.original),
            field(row.converted),
            row.original_chars(),
            row.converted_chars(),
            mapping_type,
        ));
    }
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::super::testutil::request;
    use super::*;

    fn render_str(original: &str, converted: &str) -> String {
        String::from_utf8(render(&request(original, converted))).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let csv = render_str("\u{643}\u{62A}\u{627}\u{628} \u{644}\u{64E}", "\u{6A9}\u{62A}\u{627}\u{628} \u{6B5}");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Index,Original,Converted,CharCountOriginal,CharCountConverted,MappingType"
        );
        assert_eq!(
            lines[1],
            "1,\u{643}\u{62A}\u{627}\u{628},\u{6A9}\u{62A}\u{627}\u{628},4,4,pro"
        );
        assert_eq!(lines[2], "2,\u{644}\u{64E},\u{6B5},2,1,pro");
        assert_eq!(lines.len(), 3);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_row_count_is_max_word_count() {
        let csv = render_str("a b c d", "x y");
        assert_eq!(csv.lines().count(), 1 + 4);
        assert!(csv.contains("\n4,d,,1,0,pro\n"));

        let csv = render_str("a", "x y z");
        assert_eq!(csv.lines().count(), 1 + 3);
        assert!(csv.contains("\n3,,z,0,1,pro\n"));
    }

    #[test]
    fn test_empty_has_header_only() {
        let csv = render_str("", "");
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_quoting() {
        assert_eq!(field("plain"), "plain");
        assert_eq!(field("a,b"), "\"a,b\"");
        assert_eq!(field("say \"hi\""), "\"say \"\"hi\"\"\"");
        let csv = render_str("a,b", "\"q\"");
        assert!(csv.contains("\n1,\"a,b\",\"\"\"q\"\"\",3,3,pro\n"));
    }
}
