use crate::{
    ingestor::records::CountryStat,
    processor::figure::{ColorBar, Figure, Layout, Trace},
};

/// Active node count per country on a world choropleth. The color value is
/// log10 of the count because the node distribution is heavily skewed
/// across regions; the raw count rides along as customdata for hover text.
pub fn nodes_on_map(stats: &[CountryStat]) -> Figure {
    let mut locations = Vec::with_capacity(stats.len());
    let mut z = Vec::with_capacity(stats.len());
    let mut counts = Vec::with_capacity(stats.len());

    for stat in stats.iter().filter(|s| s.active_node_count > 0.0) {
        locations.push(stat.country.clone());
        counts.push(stat.active_node_count);
        z.push(stat.active_node_count.log10());
    }

    let trace = Trace::choropleth(locations, z)
        .location_mode("country names")
        .customdata(counts)
        .hovertemplate("%{customdata}<extra>%{location}</extra>")
        .colorscale("Blues", true)
        .colorbar(ColorBar {
            title: "Number of nodes".to_string(),
            tickvals: vec![0.0, 0.48, 1.0, 1.48, 2.0, 2.48, 3.0, 3.54],
            ticktext: ["1", "3", "10", "30", "100", "300", "1000", "3500"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        });

    Figure {
        traces: vec![trace],
        layout: Layout::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(country: &str, nodes: f64) -> CountryStat {
        CountryStat {
            country: country.to_string(),
            active_node_count: nodes,
            estimated_earnings_fil: 1.0,
            bandwidth_served_bytes: 1.0,
        }
    }

    #[test]
    fn test_log_scale_color_values() {
        let figure = nodes_on_map(&[stat("Germany", 1000.0), stat("Brazil", 10.0)]);

        let trace = &figure.traces[0];
        let z = trace.z.as_ref().unwrap();
        assert!((z[0] - 3.0).abs() < 1e-9);
        assert!((z[1] - 1.0).abs() < 1e-9);
        assert_eq!(trace.customdata.as_ref().unwrap(), &[1000.0, 10.0]);
    }

    #[test]
    fn test_zero_count_countries_are_dropped() {
        let figure = nodes_on_map(&[stat("Germany", 100.0), stat("Nowhere", 0.0)]);

        let trace = &figure.traces[0];
        assert_eq!(trace.locations.as_ref().unwrap(), &["Germany"]);
        assert!(trace.z.as_ref().unwrap().iter().all(|v| v.is_finite()));
    }
}
