use serde_json::Value;

use crate::error::Result;
use crate::report::data::TableRow;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_table(rows: &[TableRow]) -> String {
    let mut html = String::from(
        "<table class=\"table table-striped\">\n  <thead>\n    <tr><th>Name</th><th>Album</th><th>Artist</th></tr>\n  </thead>\n  <tbody>\n",
    );
    for row in rows {
        html.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&row.name),
            escape_html(&row.album),
            escape_html(&row.artist)
        ));
    }
    html.push_str("  </tbody>\n</table>");
    html
}

/// A placeholder div plus the script that draws `figure` into it.
pub fn render_chart(div_id: &str, figure: &Value) -> Result<String> {
    // Track names can contain "</script>"
    let figure = serde_json::to_string(figure)?.replace("</", "<\\/");

    Ok(format!(
        r#"<div id="{id}" class="chart"></div>
<script>
  (function () {{
    var figure = {figure};
    Plotly.newPlot("{id}", figure.data, figure.layout, {{responsive: true}});
  }})();
</script>"#,
        id = escape_html(div_id),
        figure = figure
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Rock" & 'Roll'</b>"#),
            "&lt;b&gt;&quot;Rock&quot; &amp; &#39;Roll&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_table_escapes_cells() {
        let html = render_table(&[TableRow {
            name: "AC/DC <Live>".into(),
            album: "Back & Forth".into(),
            artist: "A, B".into(),
        }]);
        assert!(html.contains("<td>AC/DC &lt;Live&gt;</td>"));
        assert!(html.contains("<td>Back &amp; Forth</td>"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let html = render_table(&[]);
        assert!(html.starts_with("<table class=\"table table-striped\">"));
        assert_eq!(html.matches("<td>").count(), 0);
    }

    #[test]
    fn test_chart_script_cannot_be_closed_by_data() {
        let figure = json!({ "data": [{ "name": "</script><script>alert(1)" }], "layout": {} });
        let html = render_chart("chart-1", &figure).unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains("Plotly.newPlot(\"chart-1\""));
    }
}
