/// Wire shape and in-memory record behaviour
pub mod student_model_tests;
