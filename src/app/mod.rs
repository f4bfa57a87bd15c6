// Application layer - Use case interactors

pub mod batch;
pub mod container;
pub mod inspect_interactor;
pub mod sweep_interactor;

// Re-export interactors
pub use batch::{BatchController, BatchHandle, BatchState};
pub use container::{AppContainer, ContainerSettings, DefaultAppContainer};
pub use inspect_interactor::{InspectInteractor, InspectReport};
pub use sweep_interactor::SweepInteractor;
