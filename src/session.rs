//! A mounted page driven by explicit host events, and a scripted driver on top of it.

pub mod page_session;
pub mod simulate;

pub use page_session::{FrameReport, NavigateOutcome, PageSession, SessionOpts};
pub use simulate::{Script, ScriptAction, ScriptEvent, SimulationReport, simulate};
