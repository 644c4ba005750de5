//! Plotly figure JSON for each chart.

use serde_json::{json, Value};

use crate::report::data::{
    ArtistBar, HistogramBin, PopularityPoint, RadarSeries, ScatterPoint, SunburstNode, RADAR_AXES,
};
use crate::report::ChartKind;

fn layout(kind: ChartKind, extra: Value) -> Value {
    let mut layout = json!({
        "title": { "text": kind.title() },
        "margin": { "t": 60, "l": 50, "r": 30, "b": 50 },
    });
    if let (Some(base), Value::Object(extra)) = (layout.as_object_mut(), extra) {
        base.extend(extra);
    }
    layout
}

pub fn genre_sunburst(nodes: &[SunburstNode]) -> Value {
    json!({
        "data": [{
            "type": "sunburst",
            "ids": nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            "labels": nodes.iter().map(|n| n.label.as_str()).collect::<Vec<_>>(),
            "parents": nodes.iter().map(|n| n.parent.as_str()).collect::<Vec<_>>(),
            "values": nodes.iter().map(|n| n.value).collect::<Vec<_>>(),
            "branchvalues": "total",
        }],
        "layout": layout(ChartKind::GenreDistribution, json!({})),
    })
}

pub fn feature_radar(series: &[RadarSeries]) -> Value {
    let traces: Vec<Value> = series
        .iter()
        .map(|s| {
            json!({
                "type": "scatterpolar",
                "r": s.values,
                "theta": RADAR_AXES,
                "fill": "toself",
                "name": s.name,
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": layout(ChartKind::FeatureRadar, json!({
            "polar": { "radialaxis": { "visible": true, "range": [0, 1] } },
        })),
    })
}

pub fn scatter(kind: ChartKind, points: &[ScatterPoint], x_title: &str, y_title: &str) -> Value {
    json!({
        "data": [{
            "type": "scatter",
            "mode": "markers",
            "x": points.iter().map(|p| p.x).collect::<Vec<_>>(),
            "y": points.iter().map(|p| p.y).collect::<Vec<_>>(),
            "text": points.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            "hoverinfo": "text+x+y",
        }],
        "layout": layout(kind, json!({
            "xaxis": { "title": { "text": x_title } },
            "yaxis": { "title": { "text": y_title } },
        })),
    })
}

/// Undated points are emitted with a `null` x so Plotly leaves a gap.
pub fn popularity_line(points: &[PopularityPoint]) -> Value {
    let dates: Vec<Option<String>> = points
        .iter()
        .map(|p| p.release_date.map(|d| d.format("%Y-%m-%d").to_string()))
        .collect();

    json!({
        "data": [{
            "type": "scatter",
            "mode": "lines",
            "x": dates,
            "y": points.iter().map(|p| p.popularity).collect::<Vec<_>>(),
            "text": points.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        }],
        "layout": layout(ChartKind::PopularityOverTime, json!({
            "xaxis": { "title": { "text": "Release Date" }, "type": "date" },
            "yaxis": { "title": { "text": "Popularity" } },
        })),
    })
}

/// Bins are precomputed, so this is a bar chart with touching bars.
pub fn duration_histogram(bins: &[HistogramBin]) -> Value {
    json!({
        "data": [{
            "type": "bar",
            "x": bins.iter().map(|b| (b.start + b.end) / 2.0).collect::<Vec<_>>(),
            "y": bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            "width": bins.iter().map(|b| b.end - b.start).collect::<Vec<_>>(),
        }],
        "layout": layout(ChartKind::DurationDistribution, json!({
            "bargap": 0,
            "xaxis": { "title": { "text": "Duration (min)" } },
            "yaxis": { "title": { "text": "count" } },
        })),
    })
}

pub fn artist_popularity(bars: &[ArtistBar]) -> Value {
    json!({
        "data": [{
            "type": "bar",
            "x": bars.iter().map(|b| b.label.as_str()).collect::<Vec<_>>(),
            "y": bars.iter().map(|b| b.followers).collect::<Vec<_>>(),
        }],
        "layout": layout(ChartKind::ArtistPopularity, json!({
            "xaxis": { "title": { "text": "Artist" }, "type": "category" },
            "yaxis": { "title": { "text": "Artist Followers" } },
        })),
    })
}
