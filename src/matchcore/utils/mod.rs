pub mod sparse_vector;
