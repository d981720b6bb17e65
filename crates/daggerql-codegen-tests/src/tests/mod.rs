mod argument_encoding_tests;
mod generated_types_tests;
