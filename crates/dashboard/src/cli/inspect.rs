use super::{ExportOptions, OutputFormat, RecordExport};
use anyhow::Result;
use clap::Args;
use saturn_dashboard::{
    ingestor::{datasets::Dataset, fetcher::Fetcher, source::GatewaySource},
    settings::Settings,
};
use serde::Serialize;
use std::sync::Arc;
use tabled::{Table, Tabled, settings::Style};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Dataset to fetch and parse
    #[clap(value_enum)]
    pub dataset: Dataset,

    /// Reporting year override
    #[clap(long)]
    pub year: Option<i32>,

    /// Reporting month override
    #[clap(long)]
    pub month: Option<u32>,

    /// Maximum number of rows to display
    #[clap(long, default_value_t = 25)]
    pub limit: usize,

    /// Export format; pretty table on stdout when omitted
    #[clap(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// File to write exported data to
    #[clap(long)]
    pub output_file: Option<String>,
}

pub async fn handle(settings: &Settings, args: InspectArgs) -> Result<()> {
    let mut period = settings.reporting_period();
    if let Some(year) = args.year {
        period.year = year;
    }
    if let Some(month) = args.month {
        period.month = month;
    }

    let fetcher = Fetcher::new(Arc::new(GatewaySource::from_settings(settings)));

    match args.dataset {
        Dataset::ActiveNodes => show(&fetcher.active_nodes(&period).await?, &args),
        Dataset::ActiveNodeStats => show(&fetcher.active_node_stats(&period).await?, &args),
        Dataset::CountryStats => show(&fetcher.country_stats(&period).await?, &args),
        Dataset::ActiveNodesByCountry => {
            show(&fetcher.active_nodes_by_country(&period).await?, &args)
        }
        Dataset::TrafficByCountry => show(&fetcher.traffic_by_country(&period).await?, &args),
        Dataset::EarningsByCountry => show(&fetcher.earnings_by_country(&period).await?, &args),
        Dataset::Traffic => show(&fetcher.traffic(&period).await?, &args),
        Dataset::Retrievals => show(&fetcher.retrievals(&period).await?, &args),
        Dataset::RetrievalDurations => show(&fetcher.retrieval_durations(&period).await?, &args),
        Dataset::TrafficRatio => show(&fetcher.traffic_ratio(&period).await?, &args),
    }
}

fn show<T: Serialize + Tabled>(records: &[T], args: &InspectArgs) -> Result<()> {
    match args.format {
        None => {
            let table = Table::new(records.iter().take(args.limit))
                .with(Style::psql())
                .to_string();
            println!("{table}");
            println!("{} of {} rows", args.limit.min(records.len()), records.len());
            Ok(())
        }
        Some(format) => {
            let options = ExportOptions {
                format,
                output_dir: None,
                output_file: args.output_file.clone(),
            };
            options.write(&RecordExport(records), args.dataset.slug())
        }
    }
}
