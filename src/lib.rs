pub mod graph;
pub mod cust_error;
pub mod ds_instance;
pub mod greedy;
pub mod long_path;
pub mod multi_start;
pub mod batch;
