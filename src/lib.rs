pub mod peg;
pub mod puzzle_state;
pub mod move_validator;
pub mod solution;
pub mod recursive_solver;
pub mod iterative_solver;
pub mod interactive_controller;
pub mod renderer;
pub mod driver;
