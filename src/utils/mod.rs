pub mod file_detection;
