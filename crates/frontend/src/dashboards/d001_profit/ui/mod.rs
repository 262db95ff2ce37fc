mod dashboard;

pub use dashboard::ProfitDashboard;
