#![allow(unused_imports)]

pub use migplan_test_utils::fixtures::{entity, names, plan, readonly, sales_entities};
pub use migplan_test_utils::{init_tracing, with_timeout};
