pub mod d001_profit;

pub use d001_profit::ui::ProfitDashboard;
