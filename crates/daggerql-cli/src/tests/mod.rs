mod command_tests;
mod input_paths_tests;
mod test_utils;
