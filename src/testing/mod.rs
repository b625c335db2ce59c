pub mod crash_test;
