//! Value parsers for command-line inputs

use planar_core::format::OutputFormat;
use planar_core::matrix::UNREACHABLE_COST;

/// Edge list given as label pairs, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList(pub Vec<(String, String)>);

/// Cost table rows, one per source hub
#[derive(Debug, Clone, PartialEq)]
pub struct CostRows(pub Vec<Vec<i32>>);

/// Planar points, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct PointList(pub Vec<(f64, f64)>);

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse "a-b,b-c" into label pairs. Blank items are skipped.
pub fn parse_edge_list(s: &str) -> std::result::Result<EdgeList, String> {
    let mut edges = Vec::new();
    for item in s.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        let (source, target) = item
            .split_once('-')
            .map(|(a, b)| (a.trim(), b.trim()))
            .filter(|(a, b)| !a.is_empty() && !b.is_empty())
            .ok_or_else(|| format!("invalid edge '{}' (expected source-target)", item))?;
        edges.push((source.to_string(), target.to_string()));
    }
    Ok(EdgeList(edges))
}

/// Parse "0,20;20,0" into cost rows; "-" stands for an unknown cost
pub fn parse_cost_rows(s: &str) -> std::result::Result<CostRows, String> {
    let mut rows = Vec::new();
    for (r, row) in s.split(';').map(str::trim).enumerate() {
        if row.is_empty() {
            return Err(format!("empty cost row {}", r));
        }
        let costs = row
            .split(',')
            .map(str::trim)
            .map(|entry| {
                parse_cost(entry).ok_or_else(|| format!("invalid cost '{}' in row {}", entry, r))
            })
            .collect::<std::result::Result<Vec<i32>, String>>()?;
        rows.push(costs);
    }
    Ok(CostRows(rows))
}

fn parse_cost(entry: &str) -> Option<i32> {
    if entry == "-" {
        return Some(UNREACHABLE_COST);
    }
    entry.parse::<i32>().ok()
}

/// Parse "x,y;x,y" into points
pub fn parse_point_list(s: &str) -> std::result::Result<PointList, String> {
    let mut points = Vec::new();
    for item in s.split(';').map(str::trim).filter(|i| !i.is_empty()) {
        let point = item
            .split_once(',')
            .and_then(|(x, y)| {
                let x = x.trim().parse::<f64>().ok()?;
                let y = y.trim().parse::<f64>().ok()?;
                Some((x, y))
            })
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .ok_or_else(|| format!("invalid point '{}' (expected x,y)", item))?;
        points.push(point);
    }
    if points.is_empty() {
        return Err("at least one point is required".to_string());
    }
    Ok(PointList(points))
}
