// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural animation and loading-state engine for the Brown RISD XR
//! landing page.
//!
//! The crate computes values; a rendering host draws them. Two loosely
//! coupled mechanisms are exposed:
//!
//! - [`loader::PageLoader`] mounts a [`loader::LoadingSimulator`] that fakes
//!   progress and status messages, holds the loading screen up for a minimum
//!   duration, then reveals content.
//! - [`scene::ShowcaseScene`] builds the decorative 3D composition (globe,
//!   bears, bear swarm, VR headset rig) into an [`animation::FrameAnimator`]
//!   that is advanced once per rendered frame.
//!
//! # Key entry points
//!
//! - [`options::Options`] - timing and scene configuration (TOML presets)
//! - [`util::frame_clock::FrameClock`] - elapsed/delta time for the frame
//!   loop
//! - [`animation::AnimationKind`] - the closed-form time functions
//!
//! Everything is single-threaded and driven by the host's clock: loader
//! timers fire from [`loader::PageLoader::update`], transforms are
//! recomputed from [`scene::ShowcaseScene::advance`].

pub mod animation;
pub mod error;
pub mod loader;
pub mod options;
pub mod scene;
pub mod util;
