pub mod animator;
pub mod host;
pub mod smooth;
pub mod trigger;

pub use animator::{
    AnimatorReport, BindingId, RevealScope, RevealSpec, ScrollAnimator, ScrubSpec, TriggerEvent,
};
pub use host::ScrollHost;
pub use smooth::{
    ScrollFrame, ScrollInput, ScrollTarget, ScrollToOpts, SmoothScroll, SmoothScrollOpts,
};
pub use trigger::{Boundary, Edge, Region, ToggleAction, ToggleActions, Transition, TriggerSpec};
