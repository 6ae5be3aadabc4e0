// src/model/mod.rs

// The closed-form profit model lives in `profit.rs`.
pub mod profit;

pub use profit::ProfitModel;
