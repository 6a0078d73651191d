mod dashboard;

pub use dashboard::DashboardServiceImpl;
