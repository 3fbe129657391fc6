mod filter;
pub use filter::Filter;

mod select;
pub use select::{Column, Condition, ExprEq, Select};

pub use sfmodel_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
