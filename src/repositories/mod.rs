pub mod csv_repository;
