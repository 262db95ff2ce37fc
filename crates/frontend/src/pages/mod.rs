pub mod landing;
pub mod proj_intro;
pub mod stock_forecast;
