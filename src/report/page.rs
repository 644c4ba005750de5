//! Full HTML pages served by the web front end and written by the CLI.

use crate::report::html::escape_html;
use crate::report::{ChartKind, Report};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
        :root {
            --bg: #0f1115;
            --card: #171a21;
            --border: #2b303b;
            --text: #e8eaf0;
            --dim: #8b93a7;
            --accent: #1db954;
        }
        * { box-sizing: border-box; }
        body {
            margin: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }
        .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
        h1 { margin-top: 0; }
        h1 span { color: var(--accent); }
        .subtitle { color: var(--dim); }
        .card {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 1.5rem;
        }
        form { display: flex; gap: 0.75rem; }
        input[type=text] {
            flex: 1;
            padding: 0.75rem;
            border-radius: 8px;
            border: 1px solid var(--border);
            background: var(--bg);
            color: var(--text);
        }
        button {
            padding: 0.75rem 1.5rem;
            border: 0;
            border-radius: 8px;
            background: var(--accent);
            color: #000;
            font-weight: 600;
            cursor: pointer;
        }
        .table { width: 100%; border-collapse: collapse; }
        .table th, .table td { padding: 0.5rem; text-align: left; border-bottom: 1px solid var(--border); }
        .table-striped tbody tr:nth-child(odd) { background: rgba(255, 255, 255, 0.03); }
        .chart { min-height: 450px; }
        .error { border-color: #f85149; }
        a { color: var(--accent); }
"#;

fn document(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {head_extra}
    <style>{style}</style>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>
"#,
        title = escape_html(title),
        head_extra = head_extra,
        style = STYLE,
        body = body
    )
}

fn playlist_form(value: &str) -> String {
    format!(
        r#"<form method="post" action="/analyze">
        <input type="text" name="playlist_url" placeholder="https://open.spotify.com/playlist/..." value="{}" required>
        <button type="submit">Analyze</button>
    </form>"#,
        escape_html(value)
    )
}

pub fn index_page() -> String {
    let body = format!(
        r#"<h1>Playlist <span>Insights</span></h1>
<p class="subtitle">Paste a public Spotify playlist link to chart its genres, audio features and popularity.</p>
<div class="card">
    {}
</div>"#,
        playlist_form("")
    );
    document("Playlist Insights", "", &body)
}

pub fn results_page(playlist_id: &str, track_count: usize, report: &Report) -> String {
    let mut body = format!(
        r#"<h1>Playlist <span>Insights</span></h1>
<p class="subtitle">Playlist {} &middot; {} tracks &middot; <a href="/">analyze another</a></p>
"#,
        escape_html(playlist_id),
        track_count
    );

    for section in report.sections() {
        let heading = if section.kind == ChartKind::Table {
            "Tracks"
        } else {
            section.kind.title()
        };
        body.push_str(&format!(
            "<div class=\"card\">\n<h2>{}</h2>\n{}\n</div>\n",
            escape_html(heading),
            section.html
        ));
    }

    let head = format!(r#"<script src="{}" charset="utf-8"></script>"#, PLOTLY_CDN);
    document("Playlist Insights - Results", &head, &body)
}

pub fn error_page(message: &str, playlist_url: &str) -> String {
    let body = format!(
        r#"<h1>Playlist <span>Insights</span></h1>
<div class="card error">
    <h2>Could not analyze playlist</h2>
    <p>{}</p>
</div>
<div class="card">
    {}
</div>"#,
        escape_html(message),
        playlist_form(playlist_url)
    );
    document("Playlist Insights - Error", "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_posts_playlist_url() {
        let html = index_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"action="/analyze""#));
        assert!(html.contains(r#"name="playlist_url""#));
        assert!(!html.contains(PLOTLY_CDN));
    }

    #[test]
    fn test_results_page_embeds_every_section() {
        let report = Report::assemble(&[], &[]).unwrap();
        let html = results_page("abc123", 0, &report);

        assert!(html.contains(PLOTLY_CDN));
        assert_eq!(html.matches("<div class=\"card\">").count(), 8);
        assert!(html.contains("<h2>Artist Popularity</h2>"));
    }

    #[test]
    fn test_error_page_escapes_message_and_input() {
        let html = error_page("bad <input>", "\"><script>");
        assert!(html.contains("bad &lt;input&gt;"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }
}
