pub mod wait_for_propagation;

pub use wait_for_propagation::WaitForPropagationUseCase;
