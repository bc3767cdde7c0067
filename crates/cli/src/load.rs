//! CSV figure loading.
//!
//! Format: one row per point with columns `figure,kind,name,x,y`. Rows that
//! share a `figure` id form one figure, points in row order. Every row of a
//! figure must carry the same `kind`; a mismatch rejects the whole figure.
//! `name` is read from the figure's first row and later rows' names are
//! ignored; an empty name means unnamed.

use anyhow::{Context, Result};
use planar::{Figure, FigureError, FigureKind, Point};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Why a CSV figure was not built.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Rejected {
    #[error(transparent)]
    Figure(#[from] FigureError),
    #[error("row {row}: kind `{found}` differs from the figure's first row `{first}`")]
    MixedKind {
        row: usize,
        first: String,
        found: String,
    },
}

/// One parsed figure, or the reason it was rejected.
pub struct Loaded {
    pub id: i64,
    pub figure: Result<Figure, Rejected>,
}

struct Pending {
    id: i64,
    kind_tag: String,
    name: Option<String>,
    points: Vec<Point>,
    conflict: Option<Rejected>,
}

pub fn load_figures_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Loaded>> {
    let path = path.as_ref();
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "figures_csv_shape");

    let ids = df.column("figure")?.cast(&DataType::Int64)?;
    let kinds = df.column("kind")?.cast(&DataType::String)?;
    let names = df.column("name")?.cast(&DataType::String)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;

    let mut order: Vec<Pending> = Vec::new();
    let mut slot: HashMap<i64, usize> = HashMap::new();
    let rows = ids
        .i64()?
        .into_iter()
        .zip(kinds.str()?.into_iter())
        .zip(names.str()?.into_iter())
        .zip(xs.f64()?.into_iter().zip(ys.f64()?.into_iter()));
    for (row, (((id, kind), name), (x, y))) in rows.enumerate() {
        let id = id.with_context(|| format!("row {row}: missing figure id"))?;
        let x = x.with_context(|| format!("row {row}: missing x"))?;
        let y = y.with_context(|| format!("row {row}: missing y"))?;
        let kind = kind.unwrap_or("unknown").trim();
        let idx = *slot.entry(id).or_insert_with(|| {
            order.push(Pending {
                id,
                kind_tag: kind.to_string(),
                name: name.filter(|n| !n.is_empty()).map(str::to_string),
                points: Vec::new(),
                conflict: None,
            });
            order.len() - 1
        });
        let pending = &mut order[idx];
        if pending.conflict.is_none() && !pending.kind_tag.eq_ignore_ascii_case(kind) {
            pending.conflict = Some(Rejected::MixedKind {
                row,
                first: pending.kind_tag.clone(),
                found: kind.to_string(),
            });
        }
        pending.points.push(Point::new(x, y));
    }

    Ok(order.into_iter().map(build).collect())
}

fn build(p: Pending) -> Loaded {
    let figure = match p.conflict {
        Some(conflict) => Err(conflict),
        None => p
            .kind_tag
            .parse::<FigureKind>()
            .and_then(|k| Figure::new(k, p.points, p.name))
            .map_err(Rejected::from),
    };
    Loaded { id: p.id, figure }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn groups_rows_by_figure_and_rejects_bad_arity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figs.csv");
        fs::write(
            &path,
            "figure,kind,name,x,y\n\
             1,triangle,T,0,0\n\
             1,triangle,T,3,0\n\
             1,triangle,T,3,4\n\
             2,square,,0,0\n\
             2,square,,1,0\n\
             2,square,,1,1\n\
             2,square,,0,1\n\
             3,triangle,Bad,0,0\n\
             3,triangle,Bad,1,1\n",
        )
        .unwrap();
        let loaded = load_figures_csv(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        let t = loaded[0].figure.as_ref().unwrap();
        assert_eq!(t.name(), Some("T"));
        assert!((t.area() - 6.0).abs() < 1e-12);
        let s = loaded[1].figure.as_ref().unwrap();
        assert_eq!(s.kind(), FigureKind::Square);
        assert_eq!(s.name(), None);
        assert_eq!(
            loaded[2].figure.as_ref().unwrap_err(),
            &Rejected::Figure(FigureError::InvalidGeometry {
                kind: FigureKind::Triangle,
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn unknown_kind_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figs.csv");
        fs::write(&path, "figure,kind,name,x,y\n7,hexagon,H,0,0\n").unwrap();
        let loaded = load_figures_csv(&path).unwrap();
        assert_eq!(loaded[0].id, 7);
        assert!(matches!(
            loaded[0].figure,
            Err(Rejected::Figure(FigureError::UnknownKind(ref k))) if k == "hexagon"
        ));
    }

    #[test]
    fn mixed_kind_group_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figs.csv");
        fs::write(
            &path,
            "figure,kind,name,x,y\n\
             4,triangle,Mixed,0,0\n\
             4,triangle,Mixed,3,0\n\
             4,square,Mixed,3,4\n\
             5,line,First,0,0\n\
             5,line,Second,1,0\n",
        )
        .unwrap();
        let loaded = load_figures_csv(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(
            loaded[0].figure.as_ref().unwrap_err(),
            &Rejected::MixedKind {
                row: 2,
                first: "triangle".into(),
                found: "square".into()
            }
        );
        // Names follow the first row.
        let line = loaded[1].figure.as_ref().unwrap();
        assert_eq!(line.name(), Some("First"));
        assert!((line.perimeter() - 1.0).abs() < 1e-12);
    }
}
