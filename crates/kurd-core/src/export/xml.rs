use std::borrow::Cow;

use quick_xml::escape::escape;

use super::csv::HEADER;
use super::rows::aligned_rows;
use super::ExportRequest;

const PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet" xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Worksheet ss:Name="Conversion">
  <Table>
"#;

const EPILOGUE: &str = "  </Table>\n </Worksheet>\n</Workbook>\n";

enum Cell<'a> {
    Number(usize),
    String(&'a str),
}

/// Drop code points XML 1.0 does not allow in character data.
fn xml_text(s: &str) -> Cow<'_, str> {
    let allowed = |c: char| {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
    };
    if s.chars().all(allowed) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| allowed(c)).collect())
    }
}

fn push_row(out: &mut String, cells: &[Cell<'_>]) {
    out.push_str("   <Row>\n");
    for cell in cells {
        let data = match cell {
            Cell::Number(n) => format!("<Data ss:Type=\"Number\">{n}</Data>"),
            Cell::String(s) => format!(
                "<Data ss:Type=\"String\">{}</Data>",
                escape(xml_text(s).as_ref())
            ),
        };
        out.push_str(&format!("    <Cell>{data}</Cell>\n"));
    }
    out.push_str("   </Row>\n");
}

pub(super) fn render(req: &ExportRequest<'_>) -> Vec<u8> {
    let mut out = String::from(PROLOGUE);
    let header: Vec<Cell<'_>> = HEADER.iter().map(|h| Cell::String(h)).collect();
    push_row(&mut out, &header);
    for row in aligned_rows(req.original, req.converted) {
        push_row(
            &mut out,
            &[
                Cell::Number(row.index),
                Cell::String(row.original),
                Cell::String(row.converted),
                Cell::Number(row.original_chars()),
                Cell::Number(row.converted_chars()),
                Cell::String(req.rule_set),
            ],
        );
    }
    out.push_str(EPILOGUE);
    out.into_bytes()
}
