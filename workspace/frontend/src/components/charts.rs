pub mod bollinger;
pub mod forecast;
pub mod normalized;
pub mod plot;

pub use bollinger::BollingerChart;
pub use forecast::ForecastChart;
pub use normalized::NormalizedChart;
