use std::fmt::Write;

use crate::model::color::{REDS, Rgb};
use crate::university::dataset::{COLUMNS, UniversityRecord};

pub const HEAT_STEPS: usize = 10;
const HEADER_FILL: Rgb = Rgb::new(0, 32, 96);
const CELL_FILL: Rgb = Rgb::new(245, 247, 250);
const NULL_TEXT: Rgb = Rgb::new(128, 128, 128);
const CELL_LINE: Rgb = Rgb::new(220, 220, 220);

/// `HEAT_STEPS` samples of the Reds scale, darkest first.
pub fn heat_palette() -> Vec<Rgb> {
    let mut colors = REDS.linspace(0.0, 1.0, HEAT_STEPS);
    colors.reverse();
    colors
}

/// Palette entry for `ratio` after min-max normalization, truncated to a
/// step index. A flat column maps everything to the first entry.
pub fn heat_color(ratio: f64, min: f64, max: f64, palette: &[Rgb]) -> Rgb {
    if palette.is_empty() {
        return CELL_FILL;
    }
    let span = max - min;
    let norm = if span > 0.0 {
        ((ratio - min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let idx = (norm * (palette.len() - 1) as f64) as usize;
    palette[idx.min(palette.len() - 1)]
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn opt_cell(v: Option<u32>) -> Option<String> {
    v.map(|n| n.to_string())
}

fn record_cells(r: &UniversityRecord) -> [Option<String>; 8] {
    [
        Some(r.rank.to_string()),
        Some(r.tier.clone()),
        Some(r.name.clone()),
        Some(r.undergraduates.to_string()),
        opt_cell(r.masters),
        opt_cell(r.doctorates),
        Some(r.postgraduates.to_string()),
        Some(r.ratio.to_string()),
    ]
}

/// Standalone HTML page with the ranking table. The ratio column is
/// heat-coloured and any header click sorts the rows by that column.
pub fn render_ratio_table_html(records: &[UniversityRecord], title: &str) -> String {
    let palette = heat_palette();
    let min = records.iter().map(|r| r.ratio).fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(|r| r.ratio)
        .fold(f64::NEG_INFINITY, f64::max);
    let ratio_col = COLUMNS.len() - 1;

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    out.push_str("<style>\n");
    out.push_str("body { font-family: SimHei, sans-serif; background: white; margin: 80px 40px 40px 40px; }\n");
    out.push_str("h1 { font-size: 24px; font-weight: normal; }\n");
    out.push_str("table { border-collapse: collapse; width: 1200px; }\n");
    let _ = writeln!(
        out,
        "th {{ background: {}; color: white; font-size: 14px; height: 40px; cursor: pointer; }}",
        HEADER_FILL.to_css()
    );
    let _ = writeln!(
        out,
        "td {{ background: {}; font-size: 13px; height: 35px; text-align: center; border: 1px solid {}; }}",
        CELL_FILL.to_css(),
        CELL_LINE.to_css()
    );
    let _ = writeln!(out, "td.null {{ color: {}; }}", NULL_TEXT.to_css());
    out.push_str("</style>\n</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(title));

    out.push_str("<table id=\"ranking\">\n<thead><tr>");
    for (i, name) in COLUMNS.iter().enumerate() {
        let _ = write!(out, "<th data-col=\"{i}\">{}</th>", escape_html(name));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for r in records {
        out.push_str("<tr>");
        for (i, cell) in record_cells(r).iter().enumerate() {
            match cell {
                None => out.push_str("<td class=\"null\">null</td>"),
                Some(text) if i == ratio_col => {
                    let fill = heat_color(r.ratio, min, max, &palette);
                    let _ = write!(
                        out,
                        "<td style=\"background: {}\">{}</td>",
                        fill.to_css(),
                        escape_html(text)
                    );
                }
                Some(text) => {
                    let _ = write!(out, "<td>{}</td>", escape_html(text));
                }
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out.push_str(SORT_SCRIPT);
    out.push_str("</body>\n</html>\n");
    out
}

const SORT_SCRIPT: &str = r#"<script>
document.querySelectorAll('#ranking th').forEach(function (th) {
  th.addEventListener('click', function () {
    var col = Number(th.dataset.col);
    var body = document.querySelector('#ranking tbody');
    var asc = th.dataset.order !== 'asc';
    th.dataset.order = asc ? 'asc' : 'desc';
    var rows = Array.from(body.rows);
    rows.sort(function (a, b) {
      var x = a.cells[col].textContent, y = b.cells[col].textContent;
      var nx = parseFloat(x), ny = parseFloat(y);
      var cmp = (!isNaN(nx) && !isNaN(ny)) ? nx - ny : x.localeCompare(y, 'zh');
      return asc ? cmp : -cmp;
    });
    rows.forEach(function (row) { body.appendChild(row); });
  });
});
</script>
"#;
