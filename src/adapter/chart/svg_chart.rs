//! SVG Chart Backend
//!
//! plottersでチャートをSVGファイルに描画する

use anyhow::{Context, Result};
use log::debug;
use plotters::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::chart_spec::LineChartSpec;
use crate::domain::repositories::chart_backend::{ChartBackend, ChartInstance};

const CHART_SIZE: (u32, u32) = (1280, 720);
const X_LABEL_COUNT: usize = 8;

/// SVGファイルに描画するチャートバックエンド
pub struct SvgChartBackend {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgChartBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: CHART_SIZE,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartBackend for SvgChartBackend {
    fn construct(&self, spec: &LineChartSpec) -> Result<Box<dyn ChartInstance>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create chart directory")?;
        }

        {
            let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
            draw_line_chart(root, spec)
                .with_context(|| format!("Failed to draw chart to {}", self.path.display()))?;
        }
        debug!("Wrote chart {}", self.path.display());

        Ok(Box::new(SvgChart {
            location: self.path.display().to_string(),
            path: self.path.clone(),
        }))
    }
}

/// SVGファイルとして存在するチャート
struct SvgChart {
    location: String,
    path: PathBuf,
}

impl ChartInstance for SvgChart {
    fn location(&self) -> &str {
        &self.location
    }

    fn destroy(self: Box<Self>) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", self.location)),
        }
    }
}

/// X座標（系列の位置）に対応するタイムスタンプラベル
fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if index < 0.0 || (x - index).abs() > 1e-6 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Y軸の範囲（値がすべて同じ場合も幅を持たせる）
fn y_bounds(spec: &LineChartSpec) -> (f64, f64) {
    let (lo, hi) = spec.value_range().unwrap_or((0.0, 1.0));
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else if lo == 0.0 {
        1.0
    } else {
        lo.abs() * 0.1
    };
    (lo - pad, hi + pad)
}

fn draw_line_chart<DB>(
    root: DrawingArea<DB, plotters::coord::Shift>,
    spec: &LineChartSpec,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_max = spec.len().saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = y_bounds(spec);
    let points: Vec<(f64, f64)> = spec
        .values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    let labels = &spec.labels;
    chart
        .configure_mesh()
        .x_desc(spec.x_title.as_str())
        .y_desc(spec.y_title.as_str())
        .x_labels(X_LABEL_COUNT)
        .x_label_formatter(&|x| label_at(labels, *x))
        .y_label_formatter(&|y| format!("{:.3e}", y))
        .draw()?;

    let color = RGBColor(spec.color.0, spec.color.1, spec.color.2);
    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(spec.stroke_width),
        ))?
        .label(spec.series_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], &color));

    if spec.show_points {
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
