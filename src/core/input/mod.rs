//=========================================================================
// Input Subsystem
//
// Portable input types and the per-frame snapshot screens query.
//
// Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (event.rs)
//         ↓
//    InputSnapshot (snapshot.rs, owned by GameContext)
//         ↓
//    Screens (menu navigation, map movement, battle commands)
// ```
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod snapshot;

//=== Public API ==========================================================

pub use event::{InputEvent, Key, MouseButton};
pub use snapshot::InputSnapshot;
