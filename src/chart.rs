use std::f64::consts::PI;

use svg::node::element::path::Data;
use svg::node::Value;

pub const DONUT_COLORS: [(&str, &str); 5] = [
    ("#3b82f6", "bg-blue-500"),
    ("#a855f7", "bg-purple-500"),
    ("#22c55e", "bg-green-500"),
    ("#eab308", "bg-yellow-500"),
    ("#ef4444", "bg-red-500"),
];

pub const PIE_COLORS: [&str; 9] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28DFF", "#FF69B4", "#00CED1", "#DA70D6",
    "#ADFF2F",
];

pub fn cycle<T: Copy>(palette: &[T], index: usize) -> T {
    palette[index % palette.len()]
}

/// One ring segment, expressed both as fractions of a full turn and as the
/// stroke-dash pair that draws it on a circle of the layout radius.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub dash: f64,
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArcLayout {
    pub circumference: f64,
    pub segments: Vec<ArcSegment>,
}

/// Lays segments end to end in the given order. Percentages are taken as-is,
/// so rounded inputs may leave a small gap or overlap at the end of the turn.
pub fn arc_layout(items: &[(String, f64)], radius: f64) -> ArcLayout {
    let circumference = 2.0 * PI * radius;
    let mut cursor = 0.0;
    let segments = items
        .iter()
        .map(|(label, percentage)| {
            let share = percentage.max(0.0) / 100.0;
            let segment = ArcSegment {
                label: label.clone(),
                start: cursor,
                end: cursor + share,
                dash: share * circumference,
                offset: -(cursor * circumference),
            };
            cursor += share;
            segment
        })
        .collect();
    ArcLayout {
        circumference,
        segments,
    }
}

fn point_on_circle(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * 2.0 * PI - PI / 2.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn to_point((x, y): (f64, f64)) -> (f32, f32) {
    (x as f32, y as f32)
}

fn arc_to(r: f64, large_arc: bool, (x, y): (f64, f64)) -> Vec<f32> {
    let large_arc = if large_arc { 1.0 } else { 0.0 };
    vec![r as f32, r as f32, 0.0, large_arc, 1.0, x as f32, y as f32]
}

/// Outline of one pie slice, clockwise from `start` to `end` (fractions of a
/// turn, 0 at twelve o'clock). `None` when the slice is empty.
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Option<Data> {
    let sweep = end - start;
    if sweep <= 0.0 {
        return None;
    }
    if sweep >= 0.9999 {
        return Some(
            Data::new()
                .move_to(to_point((cx, cy - r)))
                .elliptical_arc_to(arc_to(r, true, (cx, cy + r)))
                .elliptical_arc_to(arc_to(r, true, (cx, cy - r)))
                .close(),
        );
    }
    let from = point_on_circle(cx, cy, r, start);
    let to = point_on_circle(cx, cy, r, end);
    Some(
        Data::new()
            .move_to(to_point((cx, cy)))
            .line_to(to_point(from))
            .elliptical_arc_to(arc_to(r, sweep > 0.5, to))
            .close(),
    )
}

pub fn label_point(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> (f64, f64) {
    point_on_circle(cx, cy, r, (start + end) / 2.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn scale_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Vertical bars sharing one baseline at `height`, scaled to the largest value.
pub fn column_layout(values: &[f64], width: f64, height: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = scale_max(values);
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let h = if max > 0.0 { value.max(0.0) / max * height } else { 0.0 };
            Rect {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Horizontal bars stacked top to bottom, scaled to the largest value.
pub fn row_layout(values: &[f64], width: f64, height: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = scale_max(values);
    let slot = height / values.len() as f64;
    let bar_height = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| Rect {
            x: 0.0,
            y: i as f64 * slot + (slot - bar_height) / 2.0,
            width: if max > 0.0 { value.max(0.0) / max * width } else { 0.0 },
            height: bar_height,
        })
        .collect()
}

/// Points of several series on a shared scale, one x step per index.
pub fn line_series(series: &[&[f64]], width: f64, height: f64) -> Vec<Vec<(f64, f64)>> {
    let max = series
        .iter()
        .map(|values| scale_max(values))
        .fold(0.0, f64::max);
    series
        .iter()
        .map(|values| {
            let step = if values.len() > 1 {
                width / (values.len() - 1) as f64
            } else {
                0.0
            };
            values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let y = if max > 0.0 { height - value.max(0.0) / max * height } else { height };
                    let x = if values.len() > 1 { i as f64 * step } else { width / 2.0 };
                    (x, y)
                })
                .collect()
        })
        .collect()
}

/// Open path through the points in order.
pub fn line_path(points: &[(f64, f64)]) -> Option<Data> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Data::new().move_to(to_point(*first)), |data, point| {
                data.line_to(to_point(*point))
            }),
    )
}

/// Renders path data as the value of a `d` attribute.
pub fn path_attr(data: Option<Data>) -> String {
    data.map(|data| Value::from(data).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::path::{Command, Position};

    fn items(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(l, p)| (l.to_string(), *p)).collect()
    }

    #[test]
    fn arcs_accumulate_in_input_order() {
        let layout = arc_layout(&items(&[("Food", 50.0), ("Rent", 30.0), ("Fun", 20.0)]), 35.0);
        let c = layout.circumference;
        assert!((c - 2.0 * PI * 35.0).abs() < 1e-9);

        let s = &layout.segments;
        assert_eq!(s[0].start, 0.0);
        assert_eq!(s[0].offset, 0.0);
        assert!((s[1].start - 0.5).abs() < 1e-9);
        assert!((s[1].offset + 0.5 * c).abs() < 1e-9);
        assert!((s[1].dash - 0.3 * c).abs() < 1e-9);
        assert!((s[2].end - 1.0).abs() < 1e-9);
        assert_eq!(s[2].label, "Fun");
    }

    #[test]
    fn empty_layout_has_no_segments() {
        assert!(arc_layout(&[], 35.0).segments.is_empty());
    }

    fn arc_flags(data: &Data) -> Vec<(f32, f32, f32)> {
        data.iter()
            .filter_map(|command| match command {
                Command::EllipticalArc(Position::Absolute, params) => {
                    Some((params[3], params[5], params[6]))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn pie_slice_uses_large_arc_past_half() {
        let small = pie_slice_path(50.0, 50.0, 40.0, 0.0, 0.25).unwrap();
        assert_eq!(arc_flags(&small)[0].0, 0.0);
        let big = pie_slice_path(50.0, 50.0, 40.0, 0.0, 0.75).unwrap();
        assert_eq!(arc_flags(&big)[0].0, 1.0);
        assert!(pie_slice_path(50.0, 50.0, 40.0, 0.3, 0.3).is_none());
    }

    #[test]
    fn quarter_slice_starts_at_top_and_ends_on_the_right() {
        let path = pie_slice_path(50.0, 50.0, 40.0, 0.0, 0.25).unwrap();
        assert_eq!(path.len(), 4);
        match &path[0] {
            Command::Move(Position::Absolute, params) => assert_eq!(params.to_vec(), vec![50.0, 50.0]),
            other => panic!("unexpected first command {:?}", other),
        }
        match &path[1] {
            Command::Line(Position::Absolute, params) => {
                assert!((params[0] - 50.0).abs() < 1e-3);
                assert!((params[1] - 10.0).abs() < 1e-3);
            }
            other => panic!("unexpected second command {:?}", other),
        }
        let (_, x, y) = arc_flags(&path)[0];
        assert!((x - 90.0).abs() < 1e-3);
        assert!((y - 50.0).abs() < 1e-3);
        assert!(matches!(path[3], Command::Close));
    }

    #[test]
    fn full_slice_is_drawn_as_two_half_arcs() {
        let path = pie_slice_path(50.0, 50.0, 40.0, 0.0, 1.0).unwrap();
        let arcs = arc_flags(&path);
        assert_eq!(arcs.len(), 2);
        assert_eq!((arcs[0].1, arcs[0].2), (50.0, 90.0));
        assert_eq!((arcs[1].1, arcs[1].2), (50.0, 10.0));
    }

    #[test]
    fn columns_scale_to_tallest_value() {
        let bars = column_layout(&[50.0, 100.0, 0.0], 300.0, 200.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].height, 200.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[2].height, 0.0);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn rows_of_zeros_have_no_width() {
        let rows = row_layout(&[0.0, 0.0], 100.0, 40.0);
        assert!(rows.iter().all(|r| r.width == 0.0));
    }

    #[test]
    fn line_series_share_a_scale() {
        let income = [100.0, 0.0];
        let expense = [50.0, 25.0];
        let lines = line_series(&[&income, &expense], 200.0, 100.0);
        assert_eq!(lines[0], vec![(0.0, 0.0), (200.0, 100.0)]);
        assert_eq!(lines[1], vec![(0.0, 50.0), (200.0, 75.0)]);
        let path = line_path(&lines[1]).unwrap();
        assert_eq!(path.len(), 2);
        assert!(matches!(path[1], Command::Line(Position::Absolute, _)));
        assert!(line_path(&[]).is_none());
        assert!(path_attr(Some(path)).starts_with('M'));
        assert_eq!(path_attr(None), "");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(cycle(&PIE_COLORS, 9), "#0088FE");
        assert_eq!(cycle(&DONUT_COLORS, 6).1, "bg-purple-500");
    }
}
