pub mod developments;
