pub mod audit;
pub mod batch;
pub mod compare;
pub mod recommend;
