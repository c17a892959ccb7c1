//! Stateless calculators. Each module maps an explicit input struct to a result struct and
//! never fails; missing or invalid input yields zero results.

pub mod appliance;
pub mod bills;
pub mod charging;
pub mod input;
pub mod phone;
pub mod rent_vs_buy;
pub mod rental_cost;
