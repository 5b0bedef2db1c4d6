pub mod session_result;
