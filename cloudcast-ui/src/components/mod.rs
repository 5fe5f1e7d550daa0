//! Reusable Dioxus RSX components for the Cloudcast page apps.

mod cloudcasting_header;
mod error_display;
mod forecast_chart;
mod loading_overlay;
mod map_legend;
mod map_view;
mod region_header;
mod solar_header;

pub use cloudcasting_header::CloudcastingHeader;
pub use error_display::ErrorDisplay;
pub use forecast_chart::ForecastChart;
pub use loading_overlay::LoadingOverlay;
pub use map_legend::MapLegend;
pub use map_view::{MapConfig, MapView};
pub use region_header::RegionHeader;
pub use solar_header::SolarHeader;
