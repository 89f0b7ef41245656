mod render_tests;
mod session_tests;
