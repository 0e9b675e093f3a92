use common::Translator;
use domain::{Curve, LinguisticVariable};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

const CURVE_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

/// One chart per linguistic variable: every membership curve drawn as its
/// own dataset, x-axis clipped to the variable's domain, y-axis `[0, 1]`
pub struct ChartPanel {
    title: String,
    x_bounds: [f64; 2],
    curves: Vec<Curve>,
}

impl ChartPanel {
    pub fn new(variable: &LinguisticVariable, translator: &Translator) -> Self {
        let curves = variable
            .curves()
            .into_iter()
            .map(|curve| Curve {
                label: translator.translate(&curve.label).to_string(),
                points: curve.points,
            })
            .collect();

        ChartPanel {
            title: translator.translate(variable.title()).to_string(),
            x_bounds: [variable.domain_start(), variable.domain_end()],
            curves,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let datasets = self
            .curves
            .iter()
            .enumerate()
            .map(|(index, curve)| {
                Dataset::default()
                    .name(curve.label.clone())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(CURVE_COLORS[index % CURVE_COLORS.len()]))
                    .data(&curve.points)
            })
            .collect();

        let [start, end] = self.x_bounds;
        let middle = (start + end) / 2.0;

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone()),
            )
            .x_axis(
                Axis::default()
                    .bounds(self.x_bounds)
                    .labels([format!("{start}"), format!("{middle}"), format!("{end}")]),
            )
            .y_axis(
                Axis::default()
                    .title("Y")
                    .bounds([0.0, 1.0])
                    .labels(["0", "0.5", "1"]),
            );

        f.render_widget(chart, area);
    }
}
