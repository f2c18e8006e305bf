pub mod sales_repo;
