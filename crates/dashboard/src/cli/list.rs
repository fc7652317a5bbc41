use anyhow::Result;
use itertools::Itertools;
use saturn_dashboard::{charts::ChartKind, ingestor::datasets::Dataset};
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct DatasetRow {
    #[tabled(rename = "Dataset")]
    name: &'static str,
    #[tabled(rename = "Object Key")]
    object_key: &'static str,
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Chart")]
    slug: &'static str,
    #[tabled(rename = "Title")]
    title: &'static str,
    #[tabled(rename = "Datasets")]
    datasets: String,
}

pub fn handle() -> Result<()> {
    let datasets: Vec<_> = Dataset::all()
        .iter()
        .map(|d| DatasetRow {
            name: d.slug(),
            object_key: d.object_key(),
        })
        .collect();

    println!("Datasets:");
    println!("{}", Table::new(datasets).with(Style::psql()));

    let charts: Vec<_> = ChartKind::all()
        .iter()
        .map(|kind| ChartRow {
            slug: kind.slug(),
            title: kind.title(),
            datasets: kind.datasets().iter().map(|d| d.slug()).join(", "),
        })
        .collect();

    println!("\nCharts:");
    println!("{}", Table::new(charts).with(Style::psql()));

    Ok(())
}
