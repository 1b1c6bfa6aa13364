//! Loading-screen simulation and the page container that gates content on
//! it.
//!
//! Both are pumped by the host with the current instant, independently of
//! the render loop. Nothing here can fail; the only hazard is a timer firing
//! after teardown, which the owned [`timer`] handles rule out.

mod completion;
mod page;
pub mod particles;
mod simulator;
pub mod status;
pub mod timer;

pub use completion::Completion;
pub use page::{PageEvent, PageLoader, PagePhase};
pub use particles::{ParticleField, ParticlePosition};
pub use simulator::{LoaderEvent, LoadingSimulator, LoadingState};
