pub mod year_2024;
