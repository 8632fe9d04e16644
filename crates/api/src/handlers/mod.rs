pub mod fruits;
