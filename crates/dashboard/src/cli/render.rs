use super::{ExportOptions, OutputFormat};
use anyhow::{Result, bail};
use clap::Args;
use saturn_dashboard::{
    charts::{self, ChartKind},
    ingestor::{fetcher::Fetcher, source::GatewaySource},
    settings::Settings,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Chart to render; all charts when omitted
    #[clap(long, value_enum)]
    pub chart: Option<ChartKind>,

    /// Reporting year override
    #[clap(long)]
    pub year: Option<i32>,

    /// Reporting month override
    #[clap(long)]
    pub month: Option<u32>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::JsonPretty)]
    pub format: OutputFormat,

    /// Directory for one <chart>.json per chart; stdout when omitted
    #[clap(long)]
    pub output_dir: Option<String>,
}

pub async fn handle(settings: &Settings, args: RenderArgs) -> Result<()> {
    let mut period = settings.reporting_period();
    if let Some(year) = args.year {
        period.year = year;
    }
    if let Some(month) = args.month {
        period.month = month;
    }

    let fetcher = Fetcher::new(Arc::new(GatewaySource::from_settings(settings)));

    let kinds: Vec<ChartKind> = match args.chart {
        Some(kind) => vec![kind],
        None => ChartKind::all().to_vec(),
    };

    info!("Rendering {} chart(s) for {period}", kinds.len());

    let results = charts::build_figures(&fetcher, &kinds, &period).await;

    let options = ExportOptions {
        format: args.format,
        output_dir: args.output_dir,
        output_file: None,
    };

    let mut failures = 0usize;
    for (kind, result) in results {
        match result {
            Ok(figure) => options.write(&figure, kind.slug())?,
            Err(err) => {
                failures += 1;
                error!("Failed to build {kind}: {err:#}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} chart(s) failed to render");
    }
    Ok(())
}
