//! Charts Feature - Revenue, Monthly and Vendor Charts

pub mod controller;

pub use controller::ChartsController;
