pub mod compare;
pub mod denominations;
pub mod result;

pub use compare::{
    compare, compare_parallel, ComparisonReport, ComparisonRow, Run, DEFAULT_COMPARE_AMOUNTS,
};
pub use denominations::{parse_amount, Denominations, DEFAULT_DENOMINATIONS};
pub use result::ChangeResult;
