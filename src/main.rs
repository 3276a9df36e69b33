use anyhow::Result;
use gbm_mc::params::SimulationParams;
use gbm_mc::simulation::PathSimulator;
use gbm_mc::stats;
use prettytable::row;
use prettytable::Table;
use statrs::distribution::ContinuousCDF;
use statrs::statistics::Distribution as StatDistribution;
use statrs::statistics::Median;

fn main() -> Result<()> {
  // The original aluminum scenario: spot 2000 USD/t, 252 daily steps over
  // one year, 1000 paths.
  let params = SimulationParams::default();
  let simulator = PathSimulator::new(params);

  let paths = simulator.sample_par(42)?;
  let terminals = stats::terminal_prices(&paths)?;
  let summary = stats::TerminalSummary::from_prices(&terminals)?;
  let law = stats::terminal_law(&params)?;

  println!(
    "Simulated {} GBM paths over {} time points (S0 = {}, mu = {}, sigma = {})",
    params.path_count,
    params.step_count(),
    params.initial_price,
    params.drift,
    params.volatility
  );

  let mut table = Table::new();
  table.add_row(row!["terminal statistic", "simulated", "theoretical"]);
  table.add_row(row![
    "mean",
    format!("{:.2}", summary.mean),
    format!("{:.2}", law.mean().unwrap_or(f64::NAN))
  ]);
  table.add_row(row![
    "std dev",
    format!("{:.2}", summary.std_dev),
    format!("{:.2}", law.variance().unwrap_or(f64::NAN).sqrt())
  ]);
  table.add_row(row![
    "median",
    format!("{:.2}", summary.median),
    format!("{:.2}", law.median())
  ]);
  table.add_row(row![
    "5% quantile",
    format!("{:.2}", stats::quantile(&terminals, 0.05)?),
    format!("{:.2}", law.inverse_cdf(0.05))
  ]);
  table.add_row(row![
    "95% quantile",
    format!("{:.2}", stats::quantile(&terminals, 0.95)?),
    format!("{:.2}", law.inverse_cdf(0.95))
  ]);
  table.add_row(row![
    "min",
    format!("{:.2}", summary.min),
    "-"
  ]);
  table.add_row(row![
    "max",
    format!("{:.2}", summary.max),
    "-"
  ]);
  table.printstd();

  let kde = stats::TerminalKde::with_silverman_bandwidth(terminals)?;
  println!(
    "KDE bandwidth {:.2}, density at the theoretical median: {:.6}",
    kde.bandwidth,
    kde.density(law.median())
  );

  Ok(())
}
