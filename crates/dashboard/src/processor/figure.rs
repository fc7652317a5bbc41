//! Renderer data contract.
//!
//! These types serialize into the JSON a Plotly-compatible plotting surface
//! consumes: an array of traces plus a declarative layout. The pipeline
//! never depends on how the renderer draws, only on this shape.

use chrono::NaiveDate;
use serde::Serialize;

/// One renderer-ready chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

/// Values along one axis of a trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Dates(Vec<NaiveDate>),
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Dates(values) => values.len(),
            Self::Numbers(values) => values.len(),
            Self::Labels(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<NaiveDate>> for AxisValues {
    fn from(values: Vec<NaiveDate>) -> Self {
        Self::Dates(values)
    }
}

impl From<Vec<f64>> for AxisValues {
    fn from(values: Vec<f64>) -> Self {
        Self::Numbers(values)
    }
}

impl From<Vec<String>> for AxisValues {
    fn from(values: Vec<String>) -> Self {
        Self::Labels(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
    Histogram,
    Choropleth,
}

/// One named series. Line/marker series carry x and y; the choropleth trace
/// carries locations and z instead. Unset options are omitted from the JSON
/// so the renderer's defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Trace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisValues>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TraceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsetgroup: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locationmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversescale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

impl Trace {
    pub fn scatter(x: impl Into<AxisValues>, y: impl Into<AxisValues>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            ..Self::default()
        }
    }

    pub fn bar(x: impl Into<AxisValues>, y: impl Into<AxisValues>) -> Self {
        Self {
            kind: Some(TraceKind::Bar),
            ..Self::scatter(x, y)
        }
    }

    pub fn histogram(x: impl Into<AxisValues>) -> Self {
        Self {
            x: Some(x.into()),
            kind: Some(TraceKind::Histogram),
            ..Self::default()
        }
    }

    pub fn choropleth(locations: Vec<String>, z: Vec<f64>) -> Self {
        Self {
            kind: Some(TraceKind::Choropleth),
            locations: Some(locations),
            z: Some(z),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn markers(mut self) -> Self {
        self.kind = Some(TraceKind::Scatter);
        self.mode = Some("markers".to_string());
        self
    }

    pub fn x_axis(mut self, axis: &str) -> Self {
        self.xaxis = Some(axis.to_string());
        self
    }

    pub fn y_axis(mut self, axis: &str) -> Self {
        self.yaxis = Some(axis.to_string());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Some("h".to_string());
        self
    }

    pub fn offset_group(mut self, group: u32) -> Self {
        self.offsetgroup = Some(group);
        self
    }

    pub fn location_mode(mut self, mode: &str) -> Self {
        self.locationmode = Some(mode.to_string());
        self
    }

    pub fn customdata(mut self, values: Vec<f64>) -> Self {
        self.customdata = Some(values);
        self
    }

    pub fn hovertemplate(mut self, template: &str) -> Self {
        self.hovertemplate = Some(template.to_string());
        self
    }

    pub fn colorscale(mut self, scale: &str, reversed: bool) -> Self {
        self.colorscale = Some(scale.to_string());
        self.reversescale = Some(reversed);
        self
    }

    pub fn colorbar(mut self, colorbar: ColorBar) -> Self {
        self.colorbar = Some(colorbar);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: String,
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

/// Declarative axis options. `fixedrange` defaults to true: the dashboard
/// charts are not zoomable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub fixedrange: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticksuffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<bool>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            fixedrange: true,
            title: None,
            tickformat: None,
            ticksuffix: None,
            side: None,
            overlaying: None,
            domain: None,
            kind: None,
            autorange: None,
        }
    }
}

impl Axis {
    pub fn fixed() -> Self {
        Self::default()
    }

    pub fn title(mut self, text: &str) -> Self {
        self.title = Some(AxisTitle {
            text: text.to_string(),
        });
        self
    }

    pub fn tickformat(mut self, format: &str) -> Self {
        self.tickformat = Some(format.to_string());
        self
    }

    pub fn ticksuffix(mut self, suffix: &str) -> Self {
        self.ticksuffix = Some(suffix.to_string());
        self
    }

    pub fn side(mut self, side: &str) -> Self {
        self.side = Some(side.to_string());
        self
    }

    pub fn overlaying(mut self, axis: &str) -> Self {
        self.overlaying = Some(axis.to_string());
        self
    }

    pub fn domain(mut self, from: f64, to: f64) -> Self {
        self.domain = Some([from, to]);
        self
    }

    pub fn log(mut self) -> Self {
        self.kind = Some("log".to_string());
        self.autorange = Some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: String,
}

impl Legend {
    pub fn horizontal() -> Self {
        Self {
            orientation: "h".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
}

/// Selector menu toggling trace visibility. Each button carries a restyle
/// payload of one boolean per trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    pub buttons: Vec<MenuButton>,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
}

impl UpdateMenu {
    /// Selector anchored above the top-left corner of the plot area.
    pub fn top_left() -> Self {
        Self {
            buttons: Vec::new(),
            x: 0.0,
            y: 1.2,
            xanchor: "left".to_string(),
            yanchor: "top".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuButton {
    pub label: String,
    pub method: String,
    pub args: (String, Vec<bool>),
}

impl MenuButton {
    pub fn restyle_visible(label: &str, mask: Vec<bool>) -> Self {
        Self {
            label: label.to_string(),
            method: "restyle".to_string(),
            args: ("visible".to_string(), mask),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis3: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis3: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_are_omitted() {
        let trace = Trace::scatter(vec![1.0, 2.0], vec![3.0, 4.0]).name("Nodes");
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["x"], serde_json::json!([1.0, 2.0]));
        assert_eq!(json["name"], "Nodes");
        assert!(json.get("yaxis").is_none());
        assert!(json.get("visible").is_none());
    }

    #[test]
    fn test_trace_kind_serializes_as_type() {
        let trace = Trace::bar(vec![1.0], vec![2.0]);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["type"], "bar");
    }

    #[test]
    fn test_dates_serialize_as_iso_strings() {
        let dates = vec![NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()];
        let trace = Trace::scatter(dates, vec![1.0]);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["x"], serde_json::json!(["2023-10-01"]));
    }

    #[test]
    fn test_restyle_args_shape() {
        let button = MenuButton::restyle_visible("Portugal", vec![true, true, true, false]);
        let json = serde_json::to_value(&button).unwrap();

        assert_eq!(
            json["args"],
            serde_json::json!(["visible", [true, true, true, false]])
        );
        assert_eq!(json["method"], "restyle");
    }

    #[test]
    fn test_layout_axis_type_field() {
        let layout = Layout {
            yaxis: Some(Axis::fixed().log()),
            ..Layout::default()
        };
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["yaxis"]["type"], "log");
        assert_eq!(json["yaxis"]["fixedrange"], true);
        assert!(json.get("updatemenus").is_none());
    }
}
